//! Flat parent-pointer node store with structural queries.
//!
//! Holds a flat sequence of nodes ([`node::Node`]) and answers direct-child,
//! descendant, and ancestor-chain queries ([`store::TreeStore`]) without
//! materializing a tree, plus JSON dataset loading and CLI configuration.

pub mod config;
pub mod node;
pub mod schema;
pub mod storage;
pub mod store;

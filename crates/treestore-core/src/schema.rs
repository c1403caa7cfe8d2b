//! JSON helpers for node datasets.
//!
//! A dataset is a bare JSON array of node objects; there is no version
//! envelope.

use crate::node::Node;
use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize nodes (or any query result borrowing them) to pretty-printed
/// JSON.
pub fn to_json<T: Serialize + ?Sized>(nodes: &T) -> Result<String> {
    serde_json::to_string_pretty(nodes).context("failed to serialize nodes to JSON")
}

/// Deserialize a node dataset from a JSON array.
pub fn from_json(json: &str) -> Result<Vec<Node>> {
    serde_json::from_str(json).context("failed to deserialize node dataset from JSON")
}

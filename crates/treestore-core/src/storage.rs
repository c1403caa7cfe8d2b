//! Read node dataset files from disk.
//!
//! Loading is input plumbing for the CLI and tests; the store itself never
//! persists anything.

use crate::node::Node;
use crate::schema;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Dataset file name used when neither flag, environment, nor config name one.
pub const DEFAULT_DATASET: &str = "nodes.json";

/// Load a node dataset from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Node>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read node dataset from {}", path.display()))?;
    schema::from_json(&json)
        .with_context(|| format!("invalid node dataset in {}", path.display()))
}

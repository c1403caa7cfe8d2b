//! Integration tests for treestore-cli functionality.
//! Tests the underlying library surface that the CLI commands invoke.

use treestore_core::config::{CONFIG_FILE, Config};
use treestore_core::node::{NodeId, Parent};
use treestore_core::store::TreeStore;
use treestore_core::{schema, storage};

const DATASET: &str = r#"[
    { "id": 1, "parent": "root" },
    { "id": 2, "parent": 1, "type": "branch" },
    { "id": 3, "parent": 2, "type": "leaf" },
    { "id": 4, "parent": 2, "type": "leaf" }
]"#;

#[test]
fn test_load_and_query_dataset_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nodes.json");
    std::fs::write(&path, DATASET).unwrap();

    let store = TreeStore::new(storage::load(&path).unwrap());
    assert_eq!(store.all().len(), 4);
    assert_eq!(store.children(&Parent::Root).len(), 1);
    assert_eq!(store.descendants(&Parent::Id(NodeId::Int(1))).len(), 3);
    assert_eq!(store.lineage(&NodeId::Int(3)).len(), 3);
}

#[test]
fn test_load_missing_dataset_fails() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(storage::load(&tmp.path().join("nodes.json")).is_err());
}

#[test]
fn test_config_defaults_without_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::load(tmp.path()).unwrap();
    assert_eq!(config.data.path, None);
    assert_eq!(config.traversal.depth_limit, None);
}

#[test]
fn test_config_file_supplies_dataset_and_limit() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE),
        "[data]\npath = \"org.json\"\n\n[traversal]\ndepth_limit = 16\n",
    )
    .unwrap();

    let config = Config::load(tmp.path()).unwrap();
    assert_eq!(
        config.data.path.as_deref(),
        Some(std::path::Path::new("org.json"))
    );
    assert_eq!(config.traversal.depth_limit, Some(16));
}

#[test]
fn test_depth_limited_queries_match_cli_behavior() {
    let store = TreeStore::new(schema::from_json(DATASET).unwrap());
    let parent = Parent::Id(NodeId::Int(1));

    // With a configured limit the CLI issues bounded walks
    let bounded = store.descendants_to_depth(&parent, 1);
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].id, NodeId::Int(2));

    // Without one it issues the unbounded query
    assert_eq!(store.descendants(&parent).len(), 3);
}

#[test]
fn test_json_output_roundtrips() {
    let store = TreeStore::new(schema::from_json(DATASET).unwrap());
    let children = store.children(&Parent::Id(NodeId::Int(2)));
    let json = schema::to_json(&children).unwrap();
    let reparsed = schema::from_json(&json).unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed[0].kind, Some(Some("leaf".to_string())));
}

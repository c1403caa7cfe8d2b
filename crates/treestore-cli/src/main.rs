//! CLI binary for treestore: query a flat node dataset as a hierarchy.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use treestore_core::config::Config;
use treestore_core::node::{Node, NodeId, Parent};
use treestore_core::store::TreeStore;
use treestore_core::{schema, storage};

#[derive(Parser)]
#[command(name = "treestore", about = "Query a flat node dataset as a hierarchy")]
struct Cli {
    /// Dataset file (defaults to TREESTORE_DATA, then treestore.toml, then nodes.json)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node in insertion order
    Show,

    /// Look up a single node by id
    Item {
        /// Node id (integer or string)
        id: NodeId,
    },

    /// List direct children of a node ("root" selects top-level nodes)
    Children {
        /// Parent id, or "root"
        parent: Parent,
    },

    /// List all descendants of a node
    Descendants {
        /// Parent id, or "root"
        parent: Parent,

        /// Maximum traversal depth (overrides the configured limit)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Print the ancestor chain of a node, starting at the node itself
    Lineage {
        /// Node id (integer or string)
        id: NodeId,
    },

    /// Render the subtree under a node as an indented tree
    Tree {
        /// Subtree root id, or "root" for the whole forest
        #[arg(default_value = "root")]
        parent: Parent,
    },

    /// Show dataset statistics
    Info,
}

/// Dataset path precedence: `--data` flag, then `TREESTORE_DATA` / config
/// file (already merged by [`Config::load`]), then the default file name.
fn resolve_dataset(cli: &Cli, config: &Config) -> PathBuf {
    cli.data
        .clone()
        .or_else(|| config.data.path.clone())
        .unwrap_or_else(|| PathBuf::from(storage::DEFAULT_DATASET))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(Path::new("."))?;
    let data_path = resolve_dataset(&cli, &config);

    let nodes = storage::load(&data_path)?;
    tracing::debug!("loaded {} nodes from {}", nodes.len(), data_path.display());
    let store = TreeStore::new(nodes);
    let depth_limit = config.traversal.depth_limit;

    match cli.command {
        Commands::Show => cmd_show(&store, cli.json),
        Commands::Item { id } => cmd_item(&store, &id, cli.json),
        Commands::Children { parent } => cmd_children(&store, &parent, cli.json),
        Commands::Descendants { parent, depth } => {
            cmd_descendants(&store, &parent, depth.or(depth_limit), cli.json)
        }
        Commands::Lineage { id } => cmd_lineage(&store, &id, depth_limit, cli.json),
        Commands::Tree { parent } => cmd_tree(&store, &parent, depth_limit),
        Commands::Info => cmd_info(&store, depth_limit),
    }
}

/// One-line human rendering of a node.
fn describe(node: &Node) -> String {
    let kind = match &node.kind {
        Some(Some(kind)) => format!(", type: {kind}"),
        Some(None) => ", type: null".to_string(),
        None => String::new(),
    };
    format!("{} (parent: {}{kind})", node.id, node.parent)
}

fn print_nodes(nodes: &[&Node], json: bool) -> Result<()> {
    if json {
        println!("{}", schema::to_json(&nodes)?);
    } else {
        for node in nodes {
            println!("{}", describe(node));
        }
    }
    Ok(())
}

fn descendants_with<'a>(
    store: &'a TreeStore,
    parent: &Parent,
    limit: Option<usize>,
) -> Vec<&'a Node> {
    match limit {
        Some(depth) => store.descendants_to_depth(parent, depth),
        None => store.descendants(parent),
    }
}

fn lineage_with<'a>(store: &'a TreeStore, id: &NodeId, limit: Option<usize>) -> Vec<&'a Node> {
    match limit {
        Some(depth) => store.lineage_to_depth(id, depth),
        None => store.lineage(id),
    }
}

fn cmd_show(store: &TreeStore, json: bool) -> Result<()> {
    if json {
        println!("{}", schema::to_json(store.all())?);
    } else {
        for node in store.all() {
            println!("{}", describe(node));
        }
    }
    Ok(())
}

fn cmd_item(store: &TreeStore, id: &NodeId, json: bool) -> Result<()> {
    // A miss is a normal outcome, not an error exit
    match store.get(id) {
        Some(node) if json => println!("{}", schema::to_json(node)?),
        Some(node) => println!("{}", describe(node)),
        None => eprintln!("no node with id {id}"),
    }
    Ok(())
}

fn cmd_children(store: &TreeStore, parent: &Parent, json: bool) -> Result<()> {
    print_nodes(&store.children(parent), json)
}

fn cmd_descendants(
    store: &TreeStore,
    parent: &Parent,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    print_nodes(&descendants_with(store, parent, limit), json)
}

fn cmd_lineage(store: &TreeStore, id: &NodeId, limit: Option<usize>, json: bool) -> Result<()> {
    print_nodes(&lineage_with(store, id, limit), json)
}

fn cmd_tree(store: &TreeStore, parent: &Parent, limit: Option<usize>) -> Result<()> {
    match parent {
        Parent::Root => println!("root"),
        Parent::Id(id) => match store.get(id) {
            Some(node) => println!("{}", describe(node)),
            None => {
                eprintln!("no node with id {id}");
                return Ok(());
            }
        },
    }

    let mut out = String::new();
    render_children(store, parent, "", limit.unwrap_or(usize::MAX), &mut out);
    print!("{out}");
    Ok(())
}

/// Render the children of `parent` as box-drawing tree lines, recursing by
/// child id so the full subtree appears even under the root sentinel.
fn render_children(
    store: &TreeStore,
    parent: &Parent,
    prefix: &str,
    depth_left: usize,
    out: &mut String,
) {
    if depth_left == 0 {
        return;
    }
    let children = store.children(parent);
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└──" } else { "├──" };
        out.push_str(&format!("{prefix}{connector} {}\n", describe(child)));

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_children(
            store,
            &Parent::Id(child.id.clone()),
            &child_prefix,
            depth_left - 1,
            out,
        );
    }
}

fn cmd_info(store: &TreeStore, limit: Option<usize>) -> Result<()> {
    let nodes = store.all();
    let top_level = store.children(&Parent::Root).len();
    let kinds: BTreeSet<&str> = nodes
        .iter()
        .filter_map(|n| n.kind.as_ref().and_then(|k| k.as_deref()))
        .collect();
    let max_depth = nodes
        .iter()
        .map(|n| lineage_with(store, &n.id, limit).len())
        .max()
        .unwrap_or(0);

    println!("Nodes:      {}", nodes.len());
    println!("Top level:  {top_level}");
    println!("Max depth:  {max_depth}");
    if kinds.is_empty() {
        println!("Kinds:      (none)");
    } else {
        let list: Vec<&str> = kinds.into_iter().collect();
        println!("Kinds:      {}", list.join(", "));
    }
    Ok(())
}

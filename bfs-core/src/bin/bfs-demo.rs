//! Demonstration driver.
//!
//! Builds a small cyclic graph and a small tree, runs breadth-first searches
//! over them and prints the result of each. Per-node visit traces are written
//! through `tracing`; set `RUST_LOG` to override the default filter, or pass
//! `--quiet` to keep only warnings.
//!
//! Built only with the `demo` feature: `cargo run --features demo --bin bfs-demo`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bfs_core::graph::{Graph, NodeId};
use bfs_core::tree::TreeNode;

#[derive(Debug, Parser)]
#[command(name = "bfs-demo", about = "Breadth-first search over a graph and a tree")]
struct Cli {
    /// Do not print a trace line for each visited node
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the graph 10-2, 2-3, 3-10, 10-4
    Graph {
        /// Value to look for; may be repeated
        #[arg(long)]
        find: Vec<i64>,

        /// Value of the node to start from
        #[arg(long)]
        start: Option<i64>,
    },

    /// Search the tree 10 -> {2 -> {3}, 4}
    Tree {
        /// Value to look for; may be repeated
        #[arg(long)]
        find: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match cli.command {
        Some(Command::Graph { find, start }) => run_graph(&find, start),
        Some(Command::Tree { find }) => {
            run_tree(&find);
            Ok(())
        }
        None => {
            run_graph(&[], None)?;
            println!();
            run_tree(&[]);
            Ok(())
        }
    }
}

/// Filter directive for the log output. `--quiet` wins over `RUST_LOG`.
fn log_directive(quiet: bool, env: Option<String>) -> String {
    if quiet {
        return "warn".to_owned();
    }
    env.filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| "bfs_core=trace".to_owned())
}

fn init_tracing(quiet: bool) {
    let directive = log_directive(quiet, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("bfs_core=trace")))
        .with(tracing_subscriber::fmt::layer().without_time().with_target(false))
        .init();
}

fn sample_graph() -> Result<Graph<i64>> {
    let mut graph = Graph::with_capacity(4);
    let start = graph.add_node(10);
    let first_neighbor = graph.add_node(2);
    let first_neighbor_neighbor = graph.add_node(3);
    let second_neighbor = graph.add_node(4);

    graph.connect(start, first_neighbor)?;
    graph.connect(first_neighbor, first_neighbor_neighbor)?;
    graph.connect(first_neighbor_neighbor, start)?;
    graph.connect(start, second_neighbor)?;
    Ok(graph)
}

fn node_with_value(graph: &Graph<i64>, value: i64) -> Option<NodeId> {
    graph
        .nodes()
        .find(|node| *node.value() == value)
        .map(|node| node.id())
}

fn run_graph(find: &[i64], start: Option<i64>) -> Result<()> {
    let graph = sample_graph()?;

    // Without arguments, search for 4 from 3 and then for 3 from 10.
    let searches: Vec<(i64, i64)> = if find.is_empty() && start.is_none() {
        vec![(4, 3), (3, 10)]
    } else if find.is_empty() {
        bail!("--start needs at least one --find value");
    } else {
        let from = start.unwrap_or(10);
        find.iter().map(|&target| (target, from)).collect()
    };

    for (target, from) in searches {
        let Some(start_id) = node_with_value(&graph, from) else {
            bail!("graph has no node with value {from}");
        };
        println!("Searching the graph for {target}, starting from {from}");
        let found = graph
            .search(&target, start_id)
            .with_context(|| format!("search for {target} failed"))?;
        report(target, found.map(|node| node.value()));
    }
    Ok(())
}

fn run_tree(find: &[i64]) {
    let mut root = TreeNode::of(10);
    root.add_child(2).add_child(3);
    root.add_child(4);

    let targets = if find.is_empty() { &[4, 3][..] } else { find };
    for &target in targets {
        println!("Searching the tree for {target}");
        report(target, root.search(&target).map(TreeNode::value));
    }
}

fn report(target: i64, found: Option<&i64>) {
    match found {
        Some(value) => println!("  found node with value {value}"),
        None => println!("  no node with value {target}"),
    }
}

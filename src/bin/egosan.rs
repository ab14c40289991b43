//! egosan CLI: inspect ego-network datasets and score person/attribute pairs.
//!
//! Usage:
//!   egosan summary <dir> [--directed] [--mirror-attribute-edges]
//!   egosan vertices <dir> [--kind social|attribute]
//!   egosan score <dir> --social <name> --attribute <name:value>

use clap::{Args, Parser, Subcommand, ValueEnum};
use egosan::{EgoNetworkLoader, LoadOptions, SanNode, SocialAttributeNetwork};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "egosan",
    version,
    about = "Social-attribute networks from ego-network datasets"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex and edge counts
    Summary {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Print the vertex table as JSON lines
    Vertices {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Only list vertices of this kind
        #[arg(long, value_enum)]
        kind: Option<VertexKind>,
    },
    /// Print the Adamic-Adar score of a person and an attribute value
    Score {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Name of the social node
        #[arg(long)]
        social: String,
        /// Attribute as `name:value` (split at the last ':')
        #[arg(long)]
        attribute: String,
    },
}

#[derive(Args)]
struct DatasetArgs {
    /// Directory holding <ego>.edges/.featnames/.feat/.egofeat files
    dir: PathBuf,
    /// Store friendship edges one-way
    #[arg(long)]
    directed: bool,
    /// Store feature-membership edges in both directions
    #[arg(long)]
    mirror_attribute_edges: bool,
}

impl DatasetArgs {
    fn options(&self) -> LoadOptions {
        LoadOptions::new()
            .with_directed(self.directed)
            .with_mirrored_attribute_edges(self.mirror_attribute_edges)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum VertexKind {
    Social,
    Attribute,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_graph(dataset: &DatasetArgs) -> Result<SocialAttributeNetwork, String> {
    EgoNetworkLoader::new(dataset.options())
        .load(&dataset.dir)
        .map_err(|e| format!("Failed to load dataset: {}", e))
}

fn cmd_summary(graph: &SocialAttributeNetwork) -> i32 {
    println!("{:<12}  {:>10}", "VERTICES", graph.vertex_count());
    println!("{:<12}  {:>10}", "  social", graph.social_indices().len());
    println!("{:<12}  {:>10}", "  attribute", graph.attribute_indices().len());
    println!("{:<12}  {:>10}", "EDGES", graph.edge_count());
    0
}

fn cmd_vertices(graph: &SocialAttributeNetwork, kind: Option<VertexKind>) -> i32 {
    for (index, node) in graph.vertices() {
        let keep = match kind {
            None => true,
            Some(VertexKind::Social) => node.is_social(),
            Some(VertexKind::Attribute) => node.is_attribute(),
        };
        if !keep {
            continue;
        }
        let line = serde_json::json!({
            "index": index,
            "degree": graph.degree(index),
            "node": node,
        });
        println!("{}", line);
    }
    0
}

fn cmd_score(graph: &SocialAttributeNetwork, social: &str, attribute: &str) -> i32 {
    let Some((name, value)) = attribute.rsplit_once(':') else {
        eprintln!("Error: attribute '{}' is not of the form name:value", attribute);
        return 1;
    };
    let Some(u) = graph.index_of(&SanNode::social(social)) else {
        eprintln!("Error: social node '{}' not found", social);
        return 1;
    };
    let Some(v) = graph.index_of(&SanNode::attribute(name, value)) else {
        eprintln!("Error: attribute node '{}' not found", attribute);
        return 1;
    };
    match graph.adamic_adar(u, v) {
        Ok(score) => {
            println!("{}", score);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dataset = match &cli.command {
        Commands::Summary { dataset }
        | Commands::Vertices { dataset, .. }
        | Commands::Score { dataset, .. } => dataset,
    };
    let graph = match open_graph(dataset) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match &cli.command {
        Commands::Summary { .. } => cmd_summary(&graph),
        Commands::Vertices { kind, .. } => cmd_vertices(&graph, *kind),
        Commands::Score {
            social, attribute, ..
        } => cmd_score(&graph, social, attribute),
    };
    std::process::exit(code);
}

use crate::graph::GraphFormat;
use crate::model::Status;
use crate::relation::Relation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stamp")]
#[command(
    author,
    version,
    about = "Manage Architecture Decision Records",
    long_about = "Stamp is a CLI tool for creating and managing Architecture Decision Records (ADRs)."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ADR directory (skips the .stamp.yaml lookup)
    #[arg(long, global = true, env = "STAMP_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new ADR directory
    ///
    /// Creates the ADR directory, the .stamp.yaml configuration file, and an
    /// initial ADR explaining the practice.
    Init {
        /// ADR directory, relative to the current directory
        #[arg(short, long, default_value = "docs/adr")]
        directory: String,
    },

    /// Create a new ADR with the next available number
    New {
        /// Title of the ADR
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Open the new ADR in $VISUAL or $EDITOR
        #[arg(short, long)]
        editor: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all ADRs
    #[command(visible_alias = "ls")]
    List {
        /// Only show ADRs with this status
        #[arg(short, long)]
        status: Option<Status>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an ADR
    Show {
        /// ADR number
        #[arg(value_parser = parse_adr_number)]
        number: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an ADR in $VISUAL or $EDITOR
    Edit {
        /// ADR number
        #[arg(value_parser = parse_adr_number)]
        number: u32,
    },

    /// Update the status of an ADR
    ///
    /// Valid statuses: draft, proposed, accepted, deprecated, superseded, rejected
    Status {
        /// ADR number
        #[arg(value_parser = parse_adr_number)]
        number: u32,

        /// New status
        status: Status,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Link two ADRs
    ///
    /// Creates a bidirectional link between two ADRs. For "supersedes", the
    /// target ADR's status is set to Superseded; for "superseded-by", the
    /// source's is.
    ///
    /// Valid relations: supersedes, superseded-by, amends, amended-by,
    /// clarifies, clarified-by
    Link {
        /// Source ADR number
        #[arg(value_parser = parse_adr_number)]
        source: u32,

        /// Target ADR number
        #[arg(value_parser = parse_adr_number)]
        target: u32,

        /// Relation from source to target
        relation: Relation,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a graph of ADR relationships
    ///
    /// Mermaid output renders in GitHub markdown; DOT output renders with
    /// Graphviz (e.g. `dot -Tpng graph.dot -o graph.png`).
    Graph {
        /// Output format: mermaid or dot
        #[arg(short, long, default_value = "mermaid")]
        format: GraphFormat,
    },
}

pub fn parse_adr_number(s: &str) -> Result<u32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid ADR number: {}", s))
}

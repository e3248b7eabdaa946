use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::ReportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "dominance ranking from head-to-head match records")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the cleaned dominance graph in DOT format
    Graph {
        /// Match file (defaults to $MATCHES_PATH, then matches.tsv)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Only use matches of this game (defaults to "pool")
        #[arg(short, long)]
        game: Option<String>,
        /// Name of the emitted digraph (defaults to "stats")
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print competitors grouped by dominance level
    Rank {
        /// Match file (defaults to $MATCHES_PATH, then matches.tsv)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Only use matches of this game (defaults to "pool")
        #[arg(short, long)]
        game: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

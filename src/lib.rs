pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod output;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::{AppConfig, resolve_matches_path};
use crate::output::ReportFormat;
use crate::services::ProcessingService;

pub use domain::{Competitor, Match};
pub use errors::RankingError;
pub use ranking::{DominanceGraph, LevelMap, Ranking, compute_ranking};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_graph(
    input: Option<PathBuf>,
    game: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let config = AppConfig::new().with_game(game).with_graph_name(name);
    let service = ProcessingService::new(config);
    let dot = service.graph(&resolve_matches_path(input))?;
    print!("{dot}");
    Ok(())
}

pub fn handle_rank(
    input: Option<PathBuf>,
    game: Option<String>,
    format: ReportFormat,
) -> Result<()> {
    let config = AppConfig::new().with_game(game);
    let service = ProcessingService::new(config);
    let color = std::io::stdout().is_terminal();
    let report = service.rank(&resolve_matches_path(input), format, color)?;
    print!("{report}");
    Ok(())
}

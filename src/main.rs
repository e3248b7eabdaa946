use anyhow::Result;

use dominance_ranking::cli::Command;
use dominance_ranking::{handle_graph, handle_rank, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Graph { input, game, name } => handle_graph(input, game, name),
        Command::Rank {
            input,
            game,
            format,
        } => handle_rank(input, game, format),
    }
}

use std::path::Path;

use thiserror::Error;

use crate::domain::Competitor;

/// Failures of the ranking pipeline itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The leveler walked back onto its own path. `cycle` lists the
    /// competitors in traversal order, starting and ending with the same one.
    #[error("residual dominance cycle: {}", format_cycle(.cycle))]
    ResidualCycle { cycle: Vec<Competitor> },
}

fn format_cycle(cycle: &[Competitor]) -> String {
    cycle
        .iter()
        .map(Competitor::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Add context to file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read matches from: {}", path.display())
}

/// Add context to record parse errors
pub fn record_context(line: usize) -> String {
    format!("Failed to parse match record on line {}", line)
}

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::domain::Competitor;
use crate::ranking::types::{Level, LevelMap, PipelineStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct LevelEntry<'a> {
    pub level: Level,
    pub competitors: &'a [Competitor],
}

/// Level map plus pipeline counters, best level first
#[derive(Debug, Serialize)]
pub struct RankingReport<'a> {
    pub levels: Vec<LevelEntry<'a>>,
    pub stats: &'a PipelineStats,
}

impl<'a> RankingReport<'a> {
    pub fn new(levels: &'a LevelMap, stats: &'a PipelineStats) -> Self {
        let levels = levels
            .iter()
            .rev()
            .map(|(&level, competitors)| LevelEntry { level, competitors })
            .collect();

        Self { levels, stats }
    }

    pub fn render(&self, format: ReportFormat, color: bool) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text(color)),
            ReportFormat::Json => self.render_json(),
        }
    }

    /// One line per level: `Level 3: alice, bob`
    pub fn render_text(&self, color: bool) -> String {
        if self.levels.is_empty() {
            return "No ranking: no competitor dominates another\n".to_string();
        }

        let mut out = String::new();
        for entry in &self.levels {
            let heading = format!("Level {}:", entry.level);
            let heading = if color {
                heading.bold().green().to_string()
            } else {
                heading
            };
            out.push_str(&heading);
            out.push(' ');
            out.push_str(&join_names(entry.competitors));
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize ranking report")
    }
}

fn join_names(competitors: &[Competitor]) -> String {
    competitors
        .iter()
        .map(Competitor::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::compute_ranking_with_stats;
    use crate::domain::Match;

    fn chain_report_parts() -> (LevelMap, PipelineStats) {
        let matches = vec![Match::new("A", "B"), Match::new("B", "C"), Match::new("D", "C")];
        let (ranking, stats) = compute_ranking_with_stats(&matches).unwrap();
        (ranking.levels, stats)
    }

    #[test]
    fn test_text_lists_best_level_first() {
        let (levels, stats) = chain_report_parts();
        let report = RankingReport::new(&levels, &stats);

        assert_eq!(
            report.render_text(false),
            "Level 3: A\nLevel 2: B, D\nLevel 1: C\n"
        );
    }

    #[test]
    fn test_text_for_empty_ranking() {
        let levels = LevelMap::new();
        let stats = PipelineStats::default();

        let text = RankingReport::new(&levels, &stats).render_text(false);

        assert!(text.starts_with("No ranking"));
    }

    #[test]
    fn test_json_shape() {
        let (levels, stats) = chain_report_parts();
        let report = RankingReport::new(&levels, &stats);

        let json = report.render(ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["levels"][0]["level"], 3);
        assert_eq!(value["levels"][0]["competitors"], serde_json::json!(["A"]));
        assert_eq!(value["levels"][1]["competitors"], serde_json::json!(["B", "D"]));
        assert_eq!(value["stats"]["matches"], 3);
        assert_eq!(value["stats"]["final_edges"], 4);
    }
}

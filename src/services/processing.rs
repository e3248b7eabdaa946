use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::AppConfig;
use crate::domain::Match;
use crate::output::{RankingReport, ReportFormat, render_dot};
use crate::ranking::{self, PipelineStats};
use crate::services::ingestion::IngestionService;

/// Ingestion -> ranking pipeline -> rendered output
pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Cleaned dominance graph as DOT
    pub fn graph(&self, input: &Path) -> Result<String> {
        info!("=== Building Dominance Graph ===");

        let matches = self.load_matches(input)?;
        Ok(self.render_graph(&matches))
    }

    pub fn render_graph(&self, matches: &[Match]) -> String {
        let mut stats = PipelineStats {
            matches: matches.len(),
            ..PipelineStats::default()
        };
        let graph = ranking::pipeline::build_resolved_graph(matches, &mut stats);

        info!("=== Graph Complete: {} edges ===", stats.final_edges);
        render_dot(&graph, &self.config.output.graph_name)
    }

    /// Level ranking in the requested format
    pub fn rank(&self, input: &Path, format: ReportFormat, color: bool) -> Result<String> {
        info!("=== Computing Ranking ===");

        let matches = self.load_matches(input)?;
        self.render_ranking(&matches, format, color)
    }

    pub fn render_ranking(
        &self,
        matches: &[Match],
        format: ReportFormat,
        color: bool,
    ) -> Result<String> {
        let (ranking, stats) = ranking::compute_ranking_with_stats(matches)?;

        info!("=== Ranking Complete: {} levels ===", ranking.levels.len());
        RankingReport::new(&ranking.levels, &stats).render(format, color)
    }

    fn load_matches(&self, input: &Path) -> Result<Vec<Match>> {
        IngestionService::new(&self.config.ingest).load(input)
    }
}

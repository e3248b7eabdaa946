use std::collections::{BTreeMap, BTreeSet};

use log::info;

use super::graph::DominanceGraph;
use super::types::{Level, LevelMap};
use crate::domain::Competitor;
use crate::errors::RankingError;

const BASE_LEVEL: Level = 1;

/// Assigns every competitor in the graph the length of the longest
/// dominance chain below it, counting itself.
///
/// Competitors that dominate nobody are at level 1; anyone else sits one
/// above the highest competitor they dominate. A walk that returns to a
/// competitor already on its own path is reported as
/// [`RankingError::ResidualCycle`].
pub fn assign_levels(graph: &DominanceGraph) -> Result<LevelMap, RankingError> {
    let mut walker = LevelWalker::new(graph);

    for dominator in graph.dominators() {
        walker.level_of(dominator)?;
    }

    let levels = group_by_level(walker.into_levels());
    info!("Assigned {} competitors to {} levels", count_ranked(&levels), levels.len());
    Ok(levels)
}

/// Level of every competitor, keyed by competitor
#[cfg(test)]
pub(crate) fn competitor_levels(levels: &LevelMap) -> BTreeMap<&Competitor, Level> {
    levels
        .iter()
        .flat_map(|(&level, competitors)| competitors.iter().map(move |c| (c, level)))
        .collect()
}

fn count_ranked(levels: &LevelMap) -> usize {
    levels.values().map(Vec::len).sum()
}

struct LevelWalker<'a> {
    graph: &'a DominanceGraph,
    settled: BTreeMap<Competitor, Level>,
    path: Vec<Competitor>,
    on_path: BTreeSet<Competitor>,
}

impl<'a> LevelWalker<'a> {
    fn new(graph: &'a DominanceGraph) -> Self {
        Self {
            graph,
            settled: BTreeMap::new(),
            path: Vec::new(),
            on_path: BTreeSet::new(),
        }
    }

    fn level_of(&mut self, node: &Competitor) -> Result<Level, RankingError> {
        if let Some(&level) = self.settled.get(node) {
            return Ok(level);
        }
        if self.on_path.contains(node) {
            return Err(self.cycle_back_to(node));
        }

        let graph = self.graph;
        self.enter(node);
        let mut level = BASE_LEVEL;
        for dominated in graph.dominated_by(node) {
            level = level.max(self.level_of(dominated)? + 1);
        }
        self.leave(node);

        self.settled.insert(node.clone(), level);
        Ok(level)
    }

    fn enter(&mut self, node: &Competitor) {
        self.path.push(node.clone());
        self.on_path.insert(node.clone());
    }

    fn leave(&mut self, node: &Competitor) {
        self.path.pop();
        self.on_path.remove(node);
    }

    fn cycle_back_to(&self, node: &Competitor) -> RankingError {
        let start = self.path.iter().position(|n| n == node).unwrap_or(0);
        let mut cycle = self.path[start..].to_vec();
        cycle.push(node.clone());
        RankingError::ResidualCycle { cycle }
    }

    fn into_levels(self) -> BTreeMap<Competitor, Level> {
        self.settled
    }
}

fn group_by_level(levels: BTreeMap<Competitor, Level>) -> LevelMap {
    let mut grouped = LevelMap::new();

    // competitors arrive sorted, so every bucket stays sorted
    for (competitor, level) in levels {
        grouped.entry(level).or_default().push(competitor);
    }

    grouped
}

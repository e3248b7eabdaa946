//! Match records -> dominance graph -> level ranking.
//!
//! Stages run strictly in order: aggregation, graph building, transitive
//! closure, mutual-pair removal, leveling. Each run owns its graph.

pub mod aggregation;
pub mod closure;
pub mod cycles;
pub mod graph;
pub mod leveling;
pub mod pipeline;
pub mod types;

pub use aggregation::aggregate_outcomes;
pub use closure::close_transitively;
pub use cycles::remove_mutual_pairs;
pub use graph::DominanceGraph;
pub use leveling::assign_levels;
pub use pipeline::{compute_ranking, compute_ranking_with_stats};
pub use types::{LevelMap, PairKey, PairOutcomes, PipelineStats, Ranking};

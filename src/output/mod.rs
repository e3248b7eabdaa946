pub mod dot;
pub mod report;

pub use dot::render_dot;
pub use report::{RankingReport, ReportFormat};

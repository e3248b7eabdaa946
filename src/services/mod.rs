pub mod ingestion;
pub mod processing;
pub mod records;

pub use ingestion::{IngestSummary, IngestionService};
pub use processing::ProcessingService;
pub use records::{Record, RecordReader};

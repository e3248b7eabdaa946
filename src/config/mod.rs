pub mod settings;

pub use settings::{AppConfig, IngestSettings, OutputSettings, resolve_matches_path};

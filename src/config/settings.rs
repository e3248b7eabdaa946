use std::path::PathBuf;

pub const MATCHES_PATH_ENV: &str = "MATCHES_PATH";
const DEFAULT_MATCHES_PATH: &str = "matches.tsv";

pub struct IngestSettings {
    pub game: String,
    pub valid_marker: &'static str,
    pub delimiter: char,
    pub participant_separator: char,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            game: "pool".to_string(),
            valid_marker: "True",
            delimiter: '\t',
            participant_separator: ',', // "a,b" is a doubles side
        }
    }
}

pub struct OutputSettings {
    pub graph_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            graph_name: "stats".to_string(),
        }
    }
}

pub struct AppConfig {
    pub ingest: IngestSettings,
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ingest: IngestSettings::default(),
            output: OutputSettings::default(),
        }
    }

    pub fn with_game(mut self, game: Option<String>) -> Self {
        if let Some(game) = game {
            self.ingest.game = game;
        }
        self
    }

    pub fn with_graph_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.output.graph_name = name;
        }
        self
    }
}

/// Explicit path, else `$MATCHES_PATH`, else `matches.tsv`
pub fn resolve_matches_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        std::env::var(MATCHES_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MATCHES_PATH))
    })
}

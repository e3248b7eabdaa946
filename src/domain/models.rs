use serde::Serialize;
use std::fmt;

/// Competitor identifier.
///
/// Ordering is the byte-wise lexicographic order of the identifier. Pair
/// canonicalization and every sorted output in this crate rely on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Competitor(String);

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Competitor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Competitor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A single played match, winner first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub winner: Competitor,
    pub loser: Competitor,
}

impl Match {
    pub fn new(winner: impl Into<Competitor>, loser: impl Into<Competitor>) -> Self {
        Self {
            winner: winner.into(),
            loser: loser.into(),
        }
    }

    pub fn is_self_match(&self) -> bool {
        self.winner == self.loser
    }
}

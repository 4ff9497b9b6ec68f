use serde::{Deserialize, Serialize};
use crate::core::Athlete;

/// How a candidate matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Query (or a homophone spelling of it) is a substring of the name
    Exact,
    /// Query is a prefix of the name's initials
    Initials,
    /// Similarity score above threshold
    Fuzzy,
}

/// Search hit with score metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The matched athlete
    pub athlete: Athlete,

    /// Match score (0.0 - 100.0)
    pub score: f64,

    /// Classification
    pub kind: MatchKind,
}

impl MatchCandidate {
    pub fn new(athlete: Athlete, score: f64, kind: MatchKind) -> Self {
        Self { athlete, score, kind }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} - {:.0}% {:?}", self.athlete.name, self.score, self.kind)
    }
}

pub mod catalogue;
pub mod csv_source;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::{Athlete, Club};
use crate::error::Result;
use crate::ranking::clean_club_name;
use crate::tasks::club_set;

pub use catalogue::default_clubs;
pub use csv_source::{parse_athletes, CsvRosterSource, LoadStats};

/// In-memory roster snapshot, read-only once loaded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub athletes: Vec<Athlete>,
    #[serde(default)]
    pub clubs: Vec<Club>,
}

impl Roster {
    pub fn new(athletes: Vec<Athlete>, clubs: Vec<Club>) -> Self {
        Self { athletes, clubs }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty() && self.clubs.is_empty()
    }

    /// Catalogue clubs that no athlete's `teams` mentions; tasks built on
    /// them can never be answered
    pub fn unmatched_clubs(&self) -> Vec<&Club> {
        let played: HashSet<String> = self.athletes.iter().flat_map(club_set).collect();
        self.clubs
            .iter()
            .filter(|club| !played.contains(&clean_club_name(&club.name)))
            .collect()
    }
}

/// Trait for roster providers (CSV file, in-memory fixtures)
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch and parse athletes and clubs
    async fn load(&self) -> Result<Roster>;

    /// Get source name
    fn name(&self) -> &str;
}

/// Serves a roster that is already in memory
pub struct StaticRosterSource {
    roster: Roster,
}

impl StaticRosterSource {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl RosterSource for StaticRosterSource {
    async fn load(&self) -> Result<Roster> {
        Ok(self.roster.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Load a roster, falling back to an empty one when the source fails.
///
/// Searches over the empty roster simply return no candidates.
pub async fn load_roster(source: &dyn RosterSource) -> Roster {
    match source.load().await {
        Ok(roster) => {
            tracing::info!(
                "📦 Roster '{}' loaded: {} athletes, {} clubs",
                source.name(),
                roster.athletes.len(),
                roster.clubs.len()
            );

            let unmatched = roster.unmatched_clubs();
            if !roster.athletes.is_empty() && !unmatched.is_empty() {
                tracing::warn!(
                    "⚠️ {} of {} clubs never appear in athlete teams: {}",
                    unmatched.len(),
                    roster.clubs.len(),
                    unmatched.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
                );
            }
            roster
        }
        Err(e) => {
            tracing::warn!("⚠️ Roster '{}' unavailable, using empty roster: {}", source.name(), e);
            Roster::empty()
        }
    }
}

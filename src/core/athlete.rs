use serde::{Deserialize, Serialize};

/// A player record from the roster.
///
/// Missing fields deserialize to their zero value (no teams, flags off)
/// so a single incomplete record never rejects the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Athlete {
    /// Display name, unique within a roster
    #[serde(default)]
    pub name: String,

    /// Clubs the athlete played for. An entry may hold several clubs
    /// joined by `/` (see [`crate::tasks::split_teams`]).
    #[serde(default)]
    pub teams: Vec<String>,

    /// Appeared in the NHL
    #[serde(default)]
    pub played_in_top_league: bool,

    /// Won the Gagarin Cup
    #[serde(default)]
    pub won_championship: bool,
}

impl Athlete {
    /// Create an athlete with no flags set
    pub fn new<I, S>(name: impl Into<String>, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            teams: teams.into_iter().map(Into::into).collect(),
            played_in_top_league: false,
            won_championship: false,
        }
    }

    pub fn with_top_league(mut self, played: bool) -> Self {
        self.played_in_top_league = played;
        self
    }

    pub fn with_championship(mut self, won: bool) -> Self {
        self.won_championship = won;
        self
    }
}

/// A club that can appear in a prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Club {
    /// Canonical display name, also used in athlete team lists
    pub name: String,

    /// Opaque logo asset identifier
    #[serde(default)]
    pub logo_ref: String,
}

impl Club {
    pub fn new(name: impl Into<String>, logo_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_ref: logo_ref.into(),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Club;

/// Second half of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskVariant {
    /// Also played for another club
    Club { name: String, logo_ref: String },
    /// Played in the NHL
    TopLeague,
    /// Won the Gagarin Cup
    Championship,
}

impl TaskVariant {
    pub fn club(club: &Club) -> Self {
        TaskVariant::Club {
            name: club.name.clone(),
            logo_ref: club.logo_ref.clone(),
        }
    }

    /// Club name for club variants
    pub fn club_name(&self) -> Option<&str> {
        match self {
            TaskVariant::Club { name, .. } => Some(name),
            TaskVariant::TopLeague | TaskVariant::Championship => None,
        }
    }
}

impl fmt::Display for TaskVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskVariant::Club { name, .. } => write!(f, "{}", name),
            TaskVariant::TopLeague => write!(f, "NHL"),
            TaskVariant::Championship => write!(f, "Gagarin Cup winner"),
        }
    }
}

/// The active prompt: "played for `first_club` and for `second`"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub first_club: String,
    pub second: TaskVariant,
}

impl Task {
    pub fn new(first_club: impl Into<String>, second: TaskVariant) -> Self {
        Self {
            first_club: first_club.into(),
            second,
        }
    }

    /// Prompt line for logging/CLI
    pub fn display(&self) -> String {
        format!("Played for {} and {}", self.first_club, self.second)
    }
}

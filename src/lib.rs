//! # KHL Quiz Engine
//!
//! Game logic for the "played for both" hockey quiz:
//! - Per-keystroke fuzzy athlete search (exact / initials / fuzzy tiers)
//! - Homophone-tolerant query expansion
//! - Random two-condition tasks and answer verification
//! - Win-streak state machine with time-based animations
//! - Debounced, last-query-wins live search
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashSet;
//! use khl_quiz_engine::{check, Athlete, MatchEngine, Task, TaskVariant};
//!
//! let roster = vec![
//!     Athlete::new("Иван Петров", ["ЦСКА/Спартак"]).with_top_league(true),
//! ];
//!
//! let engine = MatchEngine::new();
//! let hits = engine.search("петр", &roster, &HashSet::new());
//! assert_eq!(hits[0].athlete.name, "Иван Петров");
//!
//! let task = Task::new("ЦСКА", TaskVariant::TopLeague);
//! assert!(check(&hits[0].athlete, &task));
//! ```

pub mod config;
pub mod core;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod roster;
pub mod session;
pub mod sound;
pub mod streak;
pub mod tasks;

// Re-export primary types
pub use config::QuizConfig;
pub use crate::core::{Athlete, Club, MatchCandidate, MatchKind, Task, TaskVariant};
pub use debounce::{Debouncer, LiveSearch, SearchUpdate};
pub use engine::{MatchEngine, SearchOptions};
pub use error::{QuizError, Result};
pub use roster::{default_clubs, load_roster, CsvRosterSource, Roster, RosterSource, StaticRosterSource};
pub use session::{AnswerOutcome, GameSession};
pub use sound::{SoundBoard, SoundCue};
pub use streak::{ColorPhase, StreakController, StreakPhase, StreakState, StreakTimings};
pub use tasks::{check, TaskGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

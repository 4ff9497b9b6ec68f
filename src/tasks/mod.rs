pub mod generator;
pub mod verifier;

pub use generator::{ensure_playable, TaskGenerator};
pub use verifier::{check, club_set, join_teams, split_teams, TEAM_DELIMITER};

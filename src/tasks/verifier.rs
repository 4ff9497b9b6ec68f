use std::collections::HashSet;

use crate::core::{Athlete, Task, TaskVariant};
use crate::ranking::clean_club_name;

/// Separator used when several clubs share one `teams` entry
pub const TEAM_DELIMITER: char = '/';

/// `;` is the roster file's list separator; accept it if a caller hands
/// over an unsplit field.
const SPLIT_DELIMITERS: &[char] = &[TEAM_DELIMITER, ';'];

/// Split `teams` entries into cleaned club names, dropping empties
pub fn split_teams<S: AsRef<str>>(teams: &[S]) -> Vec<String> {
    teams
        .iter()
        .flat_map(|entry| entry.as_ref().split(SPLIT_DELIMITERS))
        .map(clean_club_name)
        .filter(|club| !club.is_empty())
        .collect()
}

/// Join club names into a single `teams` entry
pub fn join_teams<S: AsRef<str>>(clubs: &[S]) -> String {
    clubs
        .iter()
        .map(|club| club.as_ref())
        .collect::<Vec<_>>()
        .join(&TEAM_DELIMITER.to_string())
}

/// Normalized set of clubs the athlete played for
pub fn club_set(athlete: &Athlete) -> HashSet<String> {
    split_teams(&athlete.teams).into_iter().collect()
}

/// Does `athlete` satisfy both conditions of `task`?
pub fn check(athlete: &Athlete, task: &Task) -> bool {
    let clubs = club_set(athlete);

    if !clubs.contains(&clean_club_name(&task.first_club)) {
        return false;
    }

    match &task.second {
        TaskVariant::Club { name, .. } => clubs.contains(&clean_club_name(name)),
        TaskVariant::TopLeague => athlete.played_in_top_league,
        TaskVariant::Championship => athlete.won_championship,
    }
}

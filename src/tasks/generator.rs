use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::core::{Club, Task, TaskVariant};
use crate::error::{QuizError, Result};
use crate::ranking::clean_club_name;

/// Fails with [`QuizError::DegenerateTask`] unless at least two distinct
/// club names are available.
pub fn ensure_playable(clubs: &[Club]) -> Result<()> {
    let distinct: HashSet<String> = clubs
        .iter()
        .map(|club| clean_club_name(&club.name))
        .filter(|name| !name.is_empty())
        .collect();

    if distinct.len() < 2 {
        return Err(QuizError::DegenerateTask {
            available: distinct.len(),
        });
    }

    Ok(())
}

/// Random prompt generator
pub struct TaskGenerator<R = StdRng> {
    rng: R,
}

impl TaskGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TaskGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TaskGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a first club, then a second condition that does not repeat it.
    ///
    /// The second condition is drawn uniformly from one random club, NHL
    /// and Gagarin Cup; a club draw equal to the first club is redrawn.
    pub fn next(&mut self, clubs: &[Club]) -> Result<Task> {
        ensure_playable(clubs)?;

        let usable: Vec<&Club> = clubs
            .iter()
            .filter(|club| !clean_club_name(&club.name).is_empty())
            .collect();

        let first = *usable
            .choose(&mut self.rng)
            .ok_or(QuizError::DegenerateTask { available: 0 })?;
        let first_key = clean_club_name(&first.name);

        let mut redraws = 0usize;
        let second = loop {
            let candidate = *usable
                .choose(&mut self.rng)
                .ok_or(QuizError::DegenerateTask { available: 0 })?;

            let pool = [
                TaskVariant::club(candidate),
                TaskVariant::TopLeague,
                TaskVariant::Championship,
            ];
            let picked = pool[self.rng.gen_range(0..pool.len())].clone();

            let repeats_first = picked
                .club_name()
                .is_some_and(|name| clean_club_name(name) == first_key);
            if !repeats_first {
                break picked;
            }
            redraws += 1;
        };

        let task = Task::new(first.name.clone(), second);
        tracing::debug!("Generated task '{}' after {} redraws", task.display(), redraws);

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clubs() -> Vec<Club> {
        vec![
            Club::new("CSKA Moskva", "ЦСКА"),
            Club::new("Spartak Moskva", "Спартак"),
            Club::new("SKA St. Petersburg", "СКА.png"),
        ]
    }

    #[test]
    fn test_requires_two_distinct_clubs() {
        let mut generator = TaskGenerator::with_seed(1);

        let err = generator.next(&[]).unwrap_err();
        assert!(matches!(err, QuizError::DegenerateTask { available: 0 }));

        let same = vec![Club::new("CSKA Moskva", "a"), Club::new(" «cska  moskva» ", "b")];
        let err = generator.next(&same).unwrap_err();
        assert!(matches!(err, QuizError::DegenerateTask { available: 1 }));
    }

    #[test]
    fn test_never_repeats_first_club() {
        let mut generator = TaskGenerator::with_seed(42);
        let clubs = vec![Club::new("CSKA Moskva", "ЦСКА"), Club::new("Spartak Moskva", "Спартак")];

        for _ in 0..2_000 {
            let task = generator.next(&clubs).unwrap();
            if let Some(name) = task.second.club_name() {
                assert_ne!(clean_club_name(name), clean_club_name(&task.first_club));
            }
        }
    }

    #[test]
    fn test_all_variants_reachable() {
        let mut generator = TaskGenerator::with_seed(7);
        let (mut club, mut nhl, mut cup) = (false, false, false);

        for _ in 0..500 {
            match generator.next(&clubs()).unwrap().second {
                TaskVariant::Club { .. } => club = true,
                TaskVariant::TopLeague => nhl = true,
                TaskVariant::Championship => cup = true,
            }
        }

        assert!(club && nhl && cup);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = TaskGenerator::with_seed(99);
        let mut b = TaskGenerator::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.next(&clubs()).unwrap(), b.next(&clubs()).unwrap());
        }
    }
}

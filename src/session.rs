use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::config::QuizConfig;
use crate::core::{MatchCandidate, Task};
use crate::debounce::{LiveSearch, SearchUpdate};
use crate::engine::MatchEngine;
use crate::error::Result;
use crate::ranking::normalize;
use crate::roster::Roster;
use crate::sound::{SoundBoard, SoundCue};
use crate::streak::{StreakController, StreakState};
use crate::tasks::{check, ensure_playable, TaskGenerator};

/// Everything the front end needs after an answer
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The task that was answered
    pub task: Task,
    /// The task to show next
    pub next_task: Task,
    pub streak: StreakState,
    pub cue: Option<SoundCue>,
}

/// One player's game: current task, streak and already guessed names
pub struct GameSession<R = StdRng> {
    roster: Arc<Roster>,
    engine: Arc<MatchEngine>,
    generator: TaskGenerator<R>,
    streak: StreakController,
    sounds: SoundBoard,
    excluded: HashSet<String>,
    task: Task,
    debounce: Duration,
    max_task_attempts: usize,
}

impl GameSession<StdRng> {
    /// Start with an entropy-seeded generator
    pub fn start(roster: Arc<Roster>, config: &QuizConfig) -> Result<Self> {
        Self::with_generator(roster, config, TaskGenerator::new())
    }
}

impl<R: Rng> GameSession<R> {
    /// Fails with `DegenerateTask` when the roster has fewer than two clubs
    pub fn with_generator(
        roster: Arc<Roster>,
        config: &QuizConfig,
        mut generator: TaskGenerator<R>,
    ) -> Result<Self> {
        config.validate()?;
        ensure_playable(&roster.clubs)?;

        let task = pick_task(&mut generator, &roster, config.max_task_attempts)?;
        tracing::info!("🎯 First task: {}", task.display());

        Ok(Self {
            engine: Arc::new(MatchEngine::with_options(config.search.clone())),
            roster,
            generator,
            streak: StreakController::new(config.streak),
            sounds: SoundBoard::new(config.muted),
            excluded: HashSet::new(),
            task,
            debounce: config.debounce(),
            max_task_attempts: config.max_task_attempts,
        })
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Normalized names already guessed this session
    pub fn excluded(&self) -> &HashSet<String> {
        &self.excluded
    }

    /// Immediate search, skipping already guessed names
    pub fn search(&self, query: &str) -> Vec<MatchCandidate> {
        self.engine.search(query, &self.roster.athletes, &self.excluded)
    }

    /// Debounced search sharing this session's engine and roster.
    ///
    /// Feed it through [`GameSession::keystroke`] so guessed names stay out
    /// of the published results.
    pub fn live_search(&self) -> (LiveSearch, mpsc::UnboundedReceiver<SearchUpdate>) {
        LiveSearch::new(self.engine.clone(), self.roster.clone(), self.debounce)
    }

    /// Schedule a debounced search with the names guessed so far excluded
    pub fn keystroke(&self, live: &mut LiveSearch, query: impl Into<String>) -> u64 {
        live.keystroke(query, self.excluded.clone())
    }

    /// Submit the selected candidate for the current task
    pub fn answer(&mut self, selection: &MatchCandidate, now: Instant) -> Result<AnswerOutcome> {
        let correct = check(&selection.athlete, &self.task);
        self.excluded.insert(normalize(&selection.athlete.name));

        let streak = self.streak.on_answer(correct, now);
        let cue = self.sounds.cue(correct);

        let next_task = pick_task(&mut self.generator, &self.roster, self.max_task_attempts)?;
        let task = std::mem::replace(&mut self.task, next_task.clone());

        tracing::info!(
            "{} '{}' for '{}' (score {:.0}), streak -> {}",
            if correct { "✅" } else { "❌" },
            selection.athlete.name,
            task.display(),
            selection.score,
            self.streak.settled_count()
        );

        Ok(AnswerOutcome {
            correct,
            task,
            next_task,
            streak,
            cue,
        })
    }

    /// Frame callback for the streak animation
    pub fn tick(&mut self, now: Instant) -> StreakState {
        self.streak.tick(now)
    }

    pub fn streak(&self) -> &StreakController {
        &self.streak
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.sounds.toggle_mute()
    }
}

/// Prefer a task at least one roster athlete can answer
fn pick_task<R: Rng>(
    generator: &mut TaskGenerator<R>,
    roster: &Roster,
    max_attempts: usize,
) -> Result<Task> {
    let mut task = generator.next(&roster.clubs)?;
    if roster.athletes.is_empty() {
        return Ok(task);
    }

    for _ in 1..max_attempts {
        if roster.athletes.iter().any(|athlete| check(athlete, &task)) {
            return Ok(task);
        }
        task = generator.next(&roster.clubs)?;
    }

    if !roster.athletes.iter().any(|athlete| check(athlete, &task)) {
        tracing::warn!(
            "⚠️ No roster athlete answers '{}' after {} draws",
            task.display(),
            max_attempts
        );
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Athlete, Club, MatchKind, TaskVariant};
    use crate::error::QuizError;

    fn roster() -> Arc<Roster> {
        Arc::new(Roster::new(
            vec![
                Athlete::new("Иван Петров", ["ЦСКА/Спартак"]).with_top_league(true),
                Athlete::new("Сергей Мозякин", ["Металлург/ЦСКА"]).with_championship(true),
            ],
            vec![
                Club::new("ЦСКА", "ЦСКА"),
                Club::new("Спартак", "Спартак"),
                Club::new("Металлург", "Металлург"),
            ],
        ))
    }

    fn session() -> GameSession {
        GameSession::with_generator(roster(), &QuizConfig::default(), TaskGenerator::with_seed(3)).unwrap()
    }

    #[test]
    fn test_start_requires_clubs() {
        let empty = Arc::new(Roster::empty());
        let err = GameSession::start(empty, &QuizConfig::default()).err().unwrap();
        assert!(matches!(err, QuizError::DegenerateTask { available: 0 }));
    }

    #[test]
    fn test_tasks_are_answerable() {
        let mut session = session();
        let roster = roster();
        let selection = MatchCandidate::new(roster.athletes[0].clone(), 100.0, MatchKind::Exact);

        for _ in 0..20 {
            assert!(roster.athletes.iter().any(|a| check(a, session.task())));
            session.answer(&selection, Instant::now()).unwrap();
        }
    }

    #[test]
    fn test_answer_flow() {
        let mut session = session();
        session.task = Task::new("ЦСКА", TaskVariant::TopLeague);

        let hits = session.search("петров");
        assert_eq!(hits.len(), 1);

        let t0 = Instant::now();
        let outcome = session.answer(&hits[0], t0).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.cue, Some(SoundCue::Win));
        assert_eq!(outcome.task, Task::new("ЦСКА", TaskVariant::TopLeague));
        assert_eq!(session.task(), &outcome.next_task);
        assert_eq!(session.tick(t0 + Duration::from_millis(1000)).count, 1);

        // Guessed names drop out of later searches
        assert!(session.search("петров").is_empty());
        assert!(session.excluded().contains("иван петров"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_search_skips_guessed_names() {
        let mut session = session();
        let (mut live, mut rx) = session.live_search();

        let latest = session.keystroke(&mut live, "петров");
        let update = rx.recv().await.unwrap();
        assert_eq!(update.token, latest);
        assert_eq!(update.candidates.len(), 1);

        session.answer(&update.candidates[0], Instant::now()).unwrap();

        let latest = session.keystroke(&mut live, "петров");
        let update = rx.recv().await.unwrap();
        assert_eq!(update.token, latest);
        assert!(update.candidates.is_empty());
    }

    #[test]
    fn test_wrong_answer_with_mute() {
        let mut session = session();
        session.task = Task::new("Спартак", TaskVariant::Championship);
        assert!(session.toggle_mute());

        let hits = session.search("петров");
        let outcome = session.answer(&hits[0], Instant::now()).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.cue, None);
        assert_eq!(outcome.streak.count, 0);
    }
}

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::error::{QuizError, Result};
use crate::streak::tween::{Easing, Tween};

/// Animation timings of the streak counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakTimings {
    /// Delay before the incremented count is shown
    pub increment_delay_ms: u64,
    /// Total visibility of the "+1" badge
    pub badge_duration_ms: u64,
    /// Length of the countdown to zero
    pub reset_duration_ms: u64,
}

impl Default for StreakTimings {
    fn default() -> Self {
        Self {
            increment_delay_ms: 400,
            badge_duration_ms: 1000,
            reset_duration_ms: 1200,
        }
    }
}

impl StreakTimings {
    pub fn validate(&self) -> Result<()> {
        if self.increment_delay_ms > self.badge_duration_ms {
            return Err(QuizError::Config(format!(
                "increment_delay_ms ({}) must not exceed badge_duration_ms ({})",
                self.increment_delay_ms, self.badge_duration_ms
            )));
        }
        Ok(())
    }

    fn increment_delay(&self) -> Duration {
        Duration::from_millis(self.increment_delay_ms)
    }

    fn badge_duration(&self) -> Duration {
        Duration::from_millis(self.badge_duration_ms)
    }

    fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }
}

/// Tone of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPhase {
    Normal,
    /// Alert tone while counting down to zero
    Resetting,
}

/// What the presentation layer renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub count: u32,
    pub color: ColorPhase,
    pub badge_visible: bool,
}

/// Externally observable machine state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreakPhase {
    Idle { count: u32 },
    /// `count` is the value currently on display
    Incrementing { count: u32 },
    Resetting { from: u32, progress: f64 },
}

#[derive(Debug, Clone, Copy)]
enum Machine {
    Idle { count: u32 },
    Incrementing { base: u32, started: Instant },
    Resetting { from: u32, tween: Tween },
}

/// Win-streak counter driven by answer results and frame ticks.
///
/// Time is passed in explicitly; `tick` is meant to be called once per
/// display frame while an animation runs.
#[derive(Debug, Clone)]
pub struct StreakController {
    timings: StreakTimings,
    machine: Machine,
}

impl StreakController {
    pub fn new(timings: StreakTimings) -> Self {
        Self::with_count(timings, 0)
    }

    /// Start idle at `count`
    pub fn with_count(timings: StreakTimings, count: u32) -> Self {
        Self {
            timings,
            machine: Machine::Idle { count },
        }
    }

    /// Count the streak settles on once the running animation ends
    pub fn settled_count(&self) -> u32 {
        match self.machine {
            Machine::Idle { count } => count,
            Machine::Incrementing { base, .. } => base.saturating_add(1),
            Machine::Resetting { .. } => 0,
        }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.machine, Machine::Idle { .. })
    }

    /// Machine state at `now`; always agrees with what `tick` would show
    pub fn phase(&self, now: Instant) -> StreakPhase {
        self.resolve(now).0
    }

    /// Feed the verifier's verdict for the answered task.
    ///
    /// An animation still running is committed to its end value first, so
    /// the latest answer always owns the visible count.
    pub fn on_answer(&mut self, correct: bool, now: Instant) -> StreakState {
        let count = self.settled_count();

        self.machine = if correct {
            Machine::Incrementing { base: count, started: now }
        } else if count == 0 {
            Machine::Idle { count: 0 }
        } else {
            let tween = Tween::new(
                f64::from(count),
                0.0,
                now,
                self.timings.reset_duration(),
                Easing::EaseInOut,
            );
            Machine::Resetting { from: count, tween }
        };

        tracing::debug!("Streak answer correct={} from count {}", correct, count);

        self.tick(now)
    }

    /// Advance animations to `now` and return what should be shown
    pub fn tick(&mut self, now: Instant) -> StreakState {
        let (phase, state) = self.resolve(now);
        if let StreakPhase::Idle { count } = phase {
            self.machine = Machine::Idle { count };
        }
        state
    }

    fn resolve(&self, now: Instant) -> (StreakPhase, StreakState) {
        match self.machine {
            Machine::Idle { count } => idle(count),
            Machine::Incrementing { base, started } => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.timings.badge_duration() {
                    return idle(base.saturating_add(1));
                }

                let count = if elapsed >= self.timings.increment_delay() {
                    base.saturating_add(1)
                } else {
                    base
                };
                (
                    StreakPhase::Incrementing { count },
                    StreakState {
                        count,
                        color: ColorPhase::Normal,
                        badge_visible: true,
                    },
                )
            }
            Machine::Resetting { from, tween } => {
                if tween.is_finished(now) {
                    return idle(0);
                }

                (
                    StreakPhase::Resetting {
                        from,
                        progress: tween.progress(now),
                    },
                    StreakState {
                        count: tween.sample(now).ceil().max(0.0) as u32,
                        color: ColorPhase::Resetting,
                        badge_visible: false,
                    },
                )
            }
        }
    }
}

fn idle(count: u32) -> (StreakPhase, StreakState) {
    (
        StreakPhase::Idle { count },
        StreakState {
            count,
            color: ColorPhase::Normal,
            badge_visible: false,
        },
    )
}

impl Default for StreakController {
    fn default() -> Self {
        Self::new(StreakTimings::default())
    }
}

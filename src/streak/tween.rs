use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Interpolation curve over normalized time `t` in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow finish
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Time-based interpolation of a value from `from` to `to`.
///
/// Sampled with a wall-clock instant (typically once per display frame),
/// so the result depends only on elapsed time, never on how often it is
/// sampled.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Elapsed fraction of the duration, clamped to `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn sample(&self, now: Instant) -> f64 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = Easing::EaseInOut.apply(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_sample_over_time() {
        let start = Instant::now();
        let tween = Tween::new(10.0, 0.0, start, Duration::from_millis(1000), Easing::Linear);

        assert_eq!(tween.sample(start), 10.0);
        assert!((tween.sample(start + Duration::from_millis(250)) - 7.5).abs() < 1e-9);
        assert_eq!(tween.sample(start + Duration::from_millis(1000)), 0.0);
        assert_eq!(tween.sample(start + Duration::from_secs(5)), 0.0);
        assert!(tween.is_finished(start + Duration::from_millis(1000)));
        assert!(!tween.is_finished(start + Duration::from_millis(999)));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let start = Instant::now();
        let tween = Tween::new(3.0, 0.0, start, Duration::ZERO, Easing::EaseInOut);
        assert!(tween.is_finished(start));
        assert_eq!(tween.sample(start), 0.0);
    }
}

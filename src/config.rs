use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::engine::SearchOptions;
use crate::error::{QuizError, Result};
use crate::streak::StreakTimings;

/// Engine configuration with defaults for every field.
///
/// # Examples
///
/// ```
/// use khl_quiz_engine::QuizConfig;
///
/// let config = QuizConfig::from_json(r#"{"search": {"max_results": 5}, "muted": true}"#).unwrap();
/// assert_eq!(config.search.max_results, 5);
/// assert_eq!(config.search.min_score, 70.0); // default
/// assert!(config.muted);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub search: SearchOptions,
    pub streak: StreakTimings,
    /// Pause after the last keystroke before searching
    pub debounce_ms: u64,
    /// Suppress sound cues
    pub muted: bool,
    /// Draws spent looking for a task some roster athlete can answer
    pub max_task_attempts: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            streak: StreakTimings::default(),
            debounce_ms: 300,
            muted: false,
            max_task_attempts: 50,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| QuizError::Config(format!("{}: cannot parse '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}

impl QuizConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Apply `KHL_QUIZ_*` environment overrides
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(min_score) = env_parse("KHL_QUIZ_MIN_SCORE")? {
            self.search.min_score = min_score;
        }
        if let Some(max_results) = env_parse("KHL_QUIZ_MAX_RESULTS")? {
            self.search.max_results = max_results;
        }
        if let Some(debounce_ms) = env_parse("KHL_QUIZ_DEBOUNCE_MS")? {
            self.debounce_ms = debounce_ms;
        }
        if let Some(muted) = env_parse("KHL_QUIZ_MUTED")? {
            self.muted = muted;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.streak.validate()?;
        if self.max_task_attempts == 0 {
            return Err(QuizError::Config("max_task_attempts must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.search.max_results, 7);
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.streak.increment_delay_ms, 400);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = QuizConfig::from_json(r#"{"streak": {"reset_duration_ms": 2000}}"#).unwrap();
        assert_eq!(config.streak.reset_duration_ms, 2000);
        assert_eq!(config.streak.badge_duration_ms, 1000);
        assert_eq!(config.search, SearchOptions::default());
    }

    #[test]
    fn test_invalid_json_values() {
        let err = QuizConfig::from_json(r#"{"search": {"min_score": 150}}"#).unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));

        let err = QuizConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, QuizError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");
        std::fs::write(&path, r#"{"debounce_ms": 150}"#).unwrap();

        let config = QuizConfig::from_file(&path).unwrap();
        assert_eq!(config.debounce_ms, 150);
    }
}

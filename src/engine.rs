use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{Athlete, MatchCandidate, MatchKind};
use crate::error::{QuizError, Result};
use crate::ranking::{expand, normalize, PositionalScorer, Scorer};

/// Search tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Queries shorter than this (in characters) return nothing
    pub min_query_chars: usize,
    /// Candidates scoring below this are dropped
    pub min_score: f64,
    /// Result list cap
    pub max_results: usize,
    /// Fixed score of substring matches
    pub exact_score: f64,
    /// Fixed score of initials matches
    pub initials_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            min_score: 70.0,
            max_results: 7,
            exact_score: 100.0,
            initials_score: 90.0,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("min_score", self.min_score),
            ("exact_score", self.exact_score),
            ("initials_score", self.initials_score),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(QuizError::Config(format!(
                    "{} must be within 0..=100, got {}",
                    field, value
                )));
            }
        }

        if self.exact_score <= self.initials_score {
            return Err(QuizError::Config(format!(
                "exact_score ({}) must be greater than initials_score ({})",
                self.exact_score, self.initials_score
            )));
        }

        if self.max_results == 0 {
            return Err(QuizError::Config("max_results must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Free-text athlete search over a roster snapshot
pub struct MatchEngine {
    scorer: Arc<dyn Scorer>,
    options: SearchOptions,
}

impl MatchEngine {
    /// Create engine with default options and the positional scorer
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self::with_scorer(Arc::new(PositionalScorer::new()), options)
    }

    pub fn with_scorer(scorer: Arc<dyn Scorer>, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Rank roster athletes against `query`.
    ///
    /// Athletes whose normalized name is in `excluded` are skipped. The
    /// result is sorted by descending score (roster order on ties),
    /// deduplicated by name and capped at `max_results`.
    pub fn search(
        &self,
        query: &str,
        roster: &[Athlete],
        excluded: &HashSet<String>,
    ) -> Vec<MatchCandidate> {
        let normalized_query = normalize(query);
        if normalized_query.chars().count() < self.options.min_query_chars {
            return Vec::new();
        }

        let start = Instant::now();
        let variants = expand(&normalized_query);
        let compact_query: String = normalized_query.chars().filter(|c| *c != ' ').collect();
        let excluded: HashSet<String> = excluded.iter().map(|name| normalize(name)).collect();

        let mut ranked: Vec<(String, MatchCandidate)> = roster
            .iter()
            .filter_map(|athlete| {
                let normalized_name = normalize(&athlete.name);
                if excluded.contains(&normalized_name) {
                    return None;
                }

                let (kind, score) =
                    self.classify(&normalized_name, &normalized_query, &compact_query, &variants);
                if score < self.options.min_score {
                    return None;
                }

                Some((normalized_name, MatchCandidate::new(athlete.clone(), score, kind)))
            })
            .collect();

        // Stable: equal scores keep roster order
        ranked.sort_by(|(_, a), (_, b)| {
            b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut seen = HashSet::new();
        let results: Vec<MatchCandidate> = ranked
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .map(|(_, candidate)| candidate)
            .take(self.options.max_results)
            .collect();

        tracing::debug!(
            "Search '{}' over {} athletes: {} candidates in {:.2}ms ({})",
            normalized_query,
            roster.len(),
            results.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.scorer.name()
        );

        results
    }

    fn classify(
        &self,
        normalized_name: &str,
        normalized_query: &str,
        compact_query: &str,
        variants: &BTreeSet<String>,
    ) -> (MatchKind, f64) {
        if variants.iter().any(|v| normalized_name.contains(v.as_str())) {
            return (MatchKind::Exact, self.options.exact_score);
        }

        if compact_query.chars().count() >= 2 {
            let parts: Vec<&str> = normalized_name.split(' ').filter(|p| !p.is_empty()).collect();
            if parts.len() >= 2 {
                let initials: String = parts.iter().filter_map(|p| p.chars().next()).collect();
                if initials.starts_with(compact_query) {
                    return (MatchKind::Initials, self.options.initials_score);
                }
            }
        }

        let score = self.scorer.similarity(normalized_name, normalized_query);
        (MatchKind::Fuzzy, score)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Athlete> {
        vec![
            Athlete::new("Иван Петров", ["ЦСКА/Спартак"]),
            Athlete::new("Сергей Мозякин", ["Металлург"]),
            Athlete::new("Пётр Иванов", ["СКА"]),
            Athlete::new("Илья Ковальчук", ["СКА"]),
        ]
    }

    fn names(results: &[MatchCandidate]) -> Vec<&str> {
        results.iter().map(|c| c.athlete.name.as_str()).collect()
    }

    #[test]
    fn test_short_query_is_empty() {
        let engine = MatchEngine::new();
        assert!(engine.search("п", &roster(), &HashSet::new()).is_empty());
        assert!(engine.search("", &roster(), &HashSet::new()).is_empty());
        assert!(engine.search("  п  ", &roster(), &HashSet::new()).is_empty());
    }

    #[test]
    fn test_exact_substring() {
        let engine = MatchEngine::new();
        let results = engine.search("петр", &roster(), &HashSet::new());

        assert_eq!(results[0].athlete.name, "Иван Петров");
        assert_eq!(results[0].kind, MatchKind::Exact);
        assert_eq!(results[0].score, 100.0);
        // "Пётр" folds to "петр"
        assert!(names(&results).contains(&"Пётр Иванов"));
    }

    #[test]
    fn test_homophone_variant_is_exact() {
        let engine = MatchEngine::new();
        let results = engine.search("мозякйн", &roster(), &HashSet::new());
        assert_eq!(names(&results), vec!["Сергей Мозякин"]);
        assert_eq!(results[0].kind, MatchKind::Exact);
    }

    #[test]
    fn test_initials() {
        let engine = MatchEngine::new();
        let results = engine.search("ик", &roster(), &HashSet::new());

        assert_eq!(names(&results), vec!["Илья Ковальчук"]);
        assert_eq!(results[0].kind, MatchKind::Initials);
        assert_eq!(results[0].score, 90.0);
    }

    #[test]
    fn test_fuzzy_typo() {
        let engine = MatchEngine::new();
        // 12 of 14 positions agree
        let results = engine.search("сергей мазякен", &roster(), &HashSet::new());

        assert_eq!(names(&results), vec!["Сергей Мозякин"]);
        assert_eq!(results[0].kind, MatchKind::Fuzzy);
        assert!(results[0].score >= 70.0);
    }

    #[test]
    fn test_excluded_names_are_skipped() {
        let engine = MatchEngine::new();
        let excluded: HashSet<String> = ["  иван ПЕТРОВ".to_string()].into_iter().collect();
        let results = engine.search("петр", &roster(), &excluded);
        assert_eq!(names(&results), vec!["Пётр Иванов"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let engine = MatchEngine::new();
        let mut athletes = roster();
        athletes.push(Athlete::new("Иван  Петров", ["Амур"]));

        let results = engine.search("петров", &athletes, &HashSet::new());
        assert_eq!(names(&results), vec!["Иван Петров"]);
        assert_eq!(results[0].athlete.teams, vec!["ЦСКА/Спартак".to_string()]);
    }

    #[test]
    fn test_cap_and_tie_order() {
        let engine = MatchEngine::with_options(SearchOptions {
            max_results: 3,
            ..SearchOptions::default()
        });
        let athletes: Vec<Athlete> = (0..10)
            .map(|i| Athlete::new(format!("Игрок {}", i), Vec::<String>::new()))
            .collect();

        let results = engine.search("игрок", &athletes, &HashSet::new());
        assert_eq!(names(&results), vec!["Игрок 0", "Игрок 1", "Игрок 2"]);
    }

    #[test]
    fn test_empty_roster() {
        let engine = MatchEngine::new();
        assert!(engine.search("петров", &[], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_options_validation() {
        assert!(SearchOptions::default().validate().is_ok());

        let bad = SearchOptions { min_score: 120.0, ..SearchOptions::default() };
        assert!(matches!(bad.validate(), Err(QuizError::Config(_))));

        let inverted = SearchOptions { exact_score: 80.0, ..SearchOptions::default() };
        assert!(inverted.validate().is_err());
    }
}

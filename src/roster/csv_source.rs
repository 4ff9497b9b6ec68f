//! Players CSV → `Vec<Athlete>`
//!
//! Expected layout (header row required, column order free):
//!
//! ```text
//! name,teams,nhl,gagarin
//! Иван Петров,CSKA Moskva/Spartak Moskva;Amur Khabarovsk,да,нет
//! ```
//!
//! `teams` is `;`-separated; a single entry may still hold `/`-joined clubs.
//! Club names must match the catalogue paired with the file (the built-in
//! one unless [`CsvRosterSource::with_clubs`] replaces it), otherwise no
//! task built on that club can be answered.
//! Flags accept locale truthy tokens (`да`, `yes`, `1`, `+`, ...); anything
//! else, including a missing column, reads as `false`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::{Athlete, Club};
use crate::error::{QuizError, Result};
use crate::ranking::normalize;
use crate::roster::{default_clubs, Roster, RosterSource};

const NAME_COLUMNS: &[&str] = &["name", "имя", "player"];
const TEAMS_COLUMNS: &[&str] = &["teams", "команды", "clubs"];
const TOP_LEAGUE_COLUMNS: &[&str] = &["nhl", "нхл", "top_league", "played_in_top_league"];
const CHAMPIONSHIP_COLUMNS: &[&str] = &["gagarin", "кубок гагарина", "championship", "won_championship"];

const TRUTHY: &[&str] = &["да", "д", "yes", "y", "true", "1", "+", "✓"];

/// Separator of the `teams` field
const TEAMS_SEPARATOR: char = ';';

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_rows: usize,
    pub parsed: usize,
    pub skipped: usize,
}

fn parse_flag(raw: &str) -> bool {
    let token = normalize(raw);
    TRUTHY.contains(&token.as_str())
}

fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = normalize(header.trim_start_matches('\u{feff}'));
        aliases.contains(&header.as_str())
    })
}

/// Parse players CSV text.
///
/// Rows without a name are skipped and counted; other missing fields
/// become zero values.
pub fn parse_athletes(text: &str) -> Result<(Vec<Athlete>, LoadStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let name_idx = find_column(&headers, NAME_COLUMNS).ok_or_else(|| QuizError::MalformedRecord {
        row: 0,
        message: format!("header has no name column: {:?}", headers.iter().collect::<Vec<_>>()),
    })?;
    let teams_idx = find_column(&headers, TEAMS_COLUMNS);
    let top_league_idx = find_column(&headers, TOP_LEAGUE_COLUMNS);
    let championship_idx = find_column(&headers, CHAMPIONSHIP_COLUMNS);

    let mut athletes = Vec::new();
    let mut stats = LoadStats::default();

    for (i, result) in reader.records().enumerate() {
        stats.total_rows += 1;
        // 1-based, header is row 1
        let row = i + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.skipped += 1;
                tracing::warn!("Skipping row {}: {}", row, e);
                continue;
            }
        };

        let field = |idx: Option<usize>| idx.and_then(|idx| record.get(idx)).unwrap_or("");

        let name = field(Some(name_idx));
        if name.is_empty() {
            stats.skipped += 1;
            let err = QuizError::MalformedRecord {
                row,
                message: "empty name".to_string(),
            };
            tracing::warn!("Skipping: {}", err);
            continue;
        }

        let teams: Vec<String> = field(teams_idx)
            .split(TEAMS_SEPARATOR)
            .map(str::trim)
            .filter(|team| !team.is_empty())
            .map(String::from)
            .collect();

        athletes.push(Athlete {
            name: name.to_string(),
            teams,
            played_in_top_league: parse_flag(field(top_league_idx)),
            won_championship: parse_flag(field(championship_idx)),
        });
        stats.parsed += 1;
    }

    Ok((athletes, stats))
}

/// Players CSV on disk plus a club catalogue
pub struct CsvRosterSource {
    path: PathBuf,
    clubs: Vec<Club>,
}

impl CsvRosterSource {
    /// CSV source paired with the built-in KHL catalogue
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            clubs: default_clubs(),
        }
    }

    pub fn with_clubs(mut self, clubs: Vec<Club>) -> Self {
        self.clubs = clubs;
        self
    }

    fn unavailable(&self, message: impl ToString) -> QuizError {
        QuizError::DataUnavailable {
            source_name: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl RosterSource for CsvRosterSource {
    async fn load(&self) -> Result<Roster> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;

        let (athletes, stats) = parse_athletes(&text).map_err(|e| self.unavailable(e))?;

        tracing::info!(
            "📄 Parsed {}: {} rows, {} athletes, {} skipped",
            self.path.display(),
            stats.total_rows,
            stats.parsed,
            stats.skipped
        );

        Ok(Roster::new(athletes, self.clubs.clone()))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

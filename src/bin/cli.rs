use anyhow::Context;
use clap::{Parser, Subcommand};
use khl_quiz_engine::ranking::{clean_club_name, normalize};
use khl_quiz_engine::{
    check, load_roster, Club, CsvRosterSource, GameSession, MatchEngine, QuizConfig, Roster, Task,
    TaskGenerator, TaskVariant,
};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "khl-quiz")]
#[command(about = "KHL quiz engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Players CSV
    #[arg(short, long, default_value = "players.csv")]
    players: PathBuf,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search athletes by name
    Search {
        /// Search query
        query: String,
    },

    /// Generate random tasks
    Task {
        /// How many tasks
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check an athlete against a task
    Check {
        /// Athlete name as in the roster
        athlete: String,

        /// First club
        first: String,

        /// Second condition: a club name, "nhl" or "gagarin"
        second: String,
    },

    /// Play interactively
    Play,
}

fn parse_variant(raw: &str, clubs: &[Club]) -> TaskVariant {
    match normalize(raw).as_str() {
        "nhl" | "нхл" => TaskVariant::TopLeague,
        "gagarin" | "cup" | "кубок" => TaskVariant::Championship,
        _ => {
            let key = clean_club_name(raw);
            let club = clubs
                .iter()
                .find(|club| clean_club_name(&club.name) == key)
                .cloned()
                .unwrap_or_else(|| Club::new(raw, ""));
            TaskVariant::club(&club)
        }
    }
}

async fn play(roster: Arc<Roster>, config: &QuizConfig) -> anyhow::Result<()> {
    let mut session = GameSession::start(roster, config).context("cannot start a game")?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("🏒 Type a name, pick a number. :mute toggles sound, :quit exits.");

    loop {
        println!("\n🎯 {}", session.task().display());

        let Some(query) = lines.next_line().await? else { break };
        let query = query.trim();
        match query {
            ":quit" => break,
            ":mute" => {
                let muted = session.toggle_mute();
                println!("{}", if muted { "🔇 muted" } else { "🔊 sound on" });
                continue;
            }
            _ => {}
        }

        let hits = session.search(query);
        if hits.is_empty() {
            println!("   no results");
            continue;
        }
        for (i, hit) in hits.iter().enumerate() {
            println!("   {}. {}", i + 1, hit.display());
        }

        let Some(choice) = lines.next_line().await? else { break };
        let Some(selection) = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| hits.get(i))
        else {
            println!("   no such option");
            continue;
        };

        let outcome = session.answer(selection, Instant::now())?;
        println!("{}", if outcome.correct { "✅ correct" } else { "❌ wrong" });
        if let Some(cue) = outcome.cue {
            println!("   ♪ {}", cue.asset());
        }

        // Render the streak animation
        let mut last_shown = None;
        loop {
            let state = session.tick(Instant::now());
            if last_shown != Some(state.count) {
                println!("   streak: {}{}", state.count, if state.badge_visible { " (+1)" } else { "" });
                last_shown = Some(state.count);
            }
            if !session.streak().is_animating() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "khl_quiz_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QuizConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => QuizConfig::default(),
    }
    .with_env_overrides()?;

    let roster = Arc::new(load_roster(&CsvRosterSource::new(&cli.players)).await);

    match cli.command {
        Commands::Search { query } => {
            println!("🔍 Searching for: {}", query);

            let engine = MatchEngine::with_options(config.search.clone());
            let hits = engine.search(&query, &roster.athletes, &HashSet::new());

            if hits.is_empty() {
                println!("   no results");
            }
            for (i, hit) in hits.iter().enumerate() {
                println!("   {}. {}", i + 1, hit.display());
            }
        }

        Commands::Task { count, seed } => {
            let mut generator = match seed {
                Some(seed) => TaskGenerator::with_seed(seed),
                None => TaskGenerator::new(),
            };
            for _ in 0..count {
                let task = generator.next(&roster.clubs)?;
                println!("🎯 {}", task.display());
            }
        }

        Commands::Check { athlete, first, second } => {
            let key = normalize(&athlete);
            let found = roster
                .athletes
                .iter()
                .find(|a| normalize(&a.name) == key)
                .with_context(|| format!("no athlete named '{}' in roster", athlete))?;

            let task = Task::new(first, parse_variant(&second, &roster.clubs));
            let verdict = check(found, &task);
            println!("{} {}: {}", if verdict { "✅" } else { "❌" }, found.name, task.display());
        }

        Commands::Play => play(roster, &config).await?,
    }

    Ok(())
}

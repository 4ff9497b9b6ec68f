use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::MatchCandidate;
use crate::engine::MatchEngine;
use crate::roster::Roster;

/// Identifies one scheduled call; stale once a newer call was scheduled
#[derive(Debug, Clone)]
pub struct DebounceToken {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl DebounceToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

/// Runs only the most recent of rapidly repeated calls.
///
/// Each `schedule` aborts the call still waiting and bumps the generation,
/// so a job that already started can still tell it was superseded.
/// Needs a running tokio runtime.
pub struct Debouncer {
    delay: Duration,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `job` after the delay unless another call is scheduled first
    pub fn schedule<F>(&mut self, job: F) -> u64
    where
        F: FnOnce(DebounceToken) + Send + 'static,
    {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let token = DebounceToken {
            id,
            latest: self.latest.clone(),
        };
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if token.is_current() {
                job(token);
            }
        }));

        id
    }

    /// Drop the pending call, if any
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Result list for one settled query
#[derive(Debug, Clone)]
pub struct SearchUpdate {
    pub token: u64,
    pub query: String,
    pub candidates: Vec<MatchCandidate>,
}

/// Keystroke-driven search: debounces input and publishes only results
/// for the latest query.
pub struct LiveSearch {
    engine: Arc<MatchEngine>,
    roster: Arc<Roster>,
    debouncer: Debouncer,
    updates: mpsc::UnboundedSender<SearchUpdate>,
}

impl LiveSearch {
    pub fn new(
        engine: Arc<MatchEngine>,
        roster: Arc<Roster>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let search = Self {
            engine,
            roster,
            debouncer: Debouncer::new(delay),
            updates,
        };
        (search, rx)
    }

    /// Input changed; returns the token of the scheduled search
    pub fn keystroke(&mut self, query: impl Into<String>, excluded: HashSet<String>) -> u64 {
        let query = query.into();
        let engine = self.engine.clone();
        let roster = self.roster.clone();
        let updates = self.updates.clone();

        self.debouncer.schedule(move |token| {
            let candidates = engine.search(&query, &roster.athletes, &excluded);
            if !token.is_current() {
                tracing::debug!("Dropping stale results for '{}'", query);
                return;
            }
            if updates
                .send(SearchUpdate {
                    token: token.id(),
                    query,
                    candidates,
                })
                .is_err()
            {
                tracing::debug!("Search results receiver dropped");
            }
        })
    }

    /// Selection made or input cleared: forget the pending search
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

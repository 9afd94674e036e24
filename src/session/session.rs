use super::leaderboard::Entry;
use super::leaderboard::Leaderboard;
use super::scores::Scores;
use crate::play::Outcome;
use crate::ANONYMOUS;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// The one shared mutable aggregate: session counters, pause flag, and the
/// cross-session leaderboard, all behind a single lock so each operation's
/// read-modify-write is indivisible. Construct one per process and pass it
/// by reference to whatever serves requests; mutation only happens through
/// these operations.
#[derive(Debug, Default)]
pub struct Session(Mutex<Inner>);

#[derive(Debug, Default)]
struct Inner {
    scores: Scores,
    paused: bool,
    leaderboard: Leaderboard,
}

impl Session {
    /// Fresh session with an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session with the leaderboard recovered from disk. Read and
    /// parse failures fall back to an empty board.
    pub fn hydrate(path: &Path) -> Self {
        let leaderboard = Leaderboard::load(path);
        log::info!("hydrated leaderboard with {} entries", leaderboard.len());
        Self(Mutex::new(Inner {
            leaderboard,
            ..Inner::default()
        }))
    }

    /// Zero the counters and clear the pause flag. Returns the fresh scores.
    pub fn start(&self) -> Scores {
        let mut inner = self.lock();
        inner.scores = Scores::default();
        inner.paused = false;
        log::info!("session started");
        inner.scores
    }

    /// Set the pause flag. Pausing while paused is a no-op.
    pub fn pause(&self) {
        self.lock().paused = true;
    }

    /// Clear the pause flag. Resuming while active is a no-op.
    pub fn resume(&self) {
        self.lock().paused = false;
    }

    /// Fold one resolved outcome into the counters.
    pub fn record(&self, outcome: Outcome) -> Scores {
        let mut inner = self.lock();
        inner.scores.tally(outcome);
        inner.scores
    }

    /// Commit the session: append the player's score to the leaderboard,
    /// keep the top entries, and return the final scores plus the updated
    /// board. The only mutation path for the leaderboard.
    pub fn end(&self, name: Option<&str>) -> (Scores, Leaderboard) {
        let mut inner = self.lock();
        let player = name.unwrap_or(ANONYMOUS);
        let entry = Entry::from((player, inner.scores.player()));
        inner.leaderboard.submit(entry);
        log::info!("session ended, {} scored {}", player, inner.scores.player());
        (inner.scores, inner.leaderboard.clone())
    }

    pub fn scores(&self) -> Scores {
        self.lock().scores
    }

    pub fn paused(&self) -> bool {
        self.lock().paused
    }

    /// Snapshot of the current board.
    pub fn leaderboard(&self) -> Leaderboard {
        self.lock().leaderboard.clone()
    }

    /// Persist the leaderboard: snapshot under the lock, write after
    /// releasing it so disk latency never extends the critical section.
    /// On failure the in-memory board stays authoritative and the error
    /// surfaces to the caller.
    pub fn checkpoint(&self, path: &Path) -> anyhow::Result<()> {
        let snapshot = self.leaderboard();
        snapshot
            .save(path)
            .inspect_err(|e| log::warn!("leaderboard checkpoint failed: {}", e))
    }

    // a poisoned lock means a panic mid-operation elsewhere; the counters
    // themselves are always in a consistent state, so keep serving
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

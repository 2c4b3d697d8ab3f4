//! Periodic live-feed poller.
//!
//! The poller owns a fixed repeating interval and is driven by its owner's
//! loop through [`LiveFeedPoller::tick`]. Each due tick dispatches one fetch on
//! a background thread, tagged with the sheet that was active at tick time.
//! Results come back over a channel and are applied on the owner thread by
//! [`LiveFeedPoller::apply_resolved`], which re-reads the store's current
//! active sheet instead of trusting anything captured at dispatch.
//!
//! Dropping the poller tears the interval down. Fetch threads still running
//! at that point finish and discard their result.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::FeedError;
use crate::feed::{ExpenseFeed, ExpenseUpdate};
use crate::model::SheetId;
use crate::store::SheetStore;

/// A fetch that has come back from the feed
#[derive(Debug)]
struct FetchResolution {
    requested_for: SheetId,
    result: Result<ExpenseUpdate, FeedError>,
}

/// What happened to one resolved fetch
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Written into the sheet, which was still the active one
    Applied(SheetId),
    /// The requesting sheet is no longer active or no longer exists; dropped
    Stale(SheetId),
    /// The feed reported an error or an unusable value; dropped
    Failed(SheetId, FeedError),
}

pub struct LiveFeedPoller {
    feed: Arc<dyn ExpenseFeed>,
    interval: Duration,
    next_tick: Instant,
    resolved_tx: Sender<FetchResolution>,
    resolved_rx: Receiver<FetchResolution>,
    in_flight: Arc<AtomicUsize>,
    closed: Arc<AtomicBool>,
}

impl LiveFeedPoller {
    /// Start the interval now; the first tick is due one interval from now
    pub fn new(feed: Arc<dyn ExpenseFeed>, interval: Duration) -> Self {
        Self::starting_at(feed, interval, Instant::now())
    }

    /// Start the interval at `start`; the first tick is due at `start + interval`
    pub fn starting_at(feed: Arc<dyn ExpenseFeed>, interval: Duration, start: Instant) -> Self {
        let (resolved_tx, resolved_rx) = channel();
        tracing::debug!(interval_ms = interval.as_millis() as u64, "Live feed poller started");
        Self {
            feed,
            interval,
            next_tick: start + interval,
            resolved_tx,
            resolved_rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of fetches dispatched but not yet resolved
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Time left until the next tick is due (zero if overdue)
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Advance the interval clock.
    ///
    /// If a tick is due and a sheet is active, dispatches a fetch for it and
    /// returns its id. A due tick with no active sheet is consumed as a
    /// no-op. Ticks missed while the owner was busy collapse into one.
    pub fn tick(&mut self, now: Instant, store: &SheetStore) -> Option<SheetId> {
        if now < self.next_tick {
            return None;
        }
        while self.next_tick <= now {
            self.next_tick += self.interval.max(Duration::from_millis(1));
        }

        let sheet_id = store.active_id()?;
        self.dispatch(sheet_id);
        Some(sheet_id)
    }

    fn dispatch(&self, sheet_id: SheetId) {
        let feed = Arc::clone(&self.feed);
        let tx = self.resolved_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let closed = Arc::clone(&self.closed);

        in_flight.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(sheet_id = %sheet_id, "Dispatching live feed fetch");

        let spawned = thread::Builder::new()
            .name("live-feed".to_string())
            .spawn(move || {
                let result = feed.fetch_latest_expense_update();
                if !closed.load(Ordering::SeqCst) {
                    // Receiver gone means the poller was dropped; nothing to do
                    let _ = tx.send(FetchResolution {
                        requested_for: sheet_id,
                        result,
                    });
                }
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });

        if let Err(e) = spawned {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            tracing::warn!(sheet_id = %sheet_id, "Failed to spawn live feed fetch: {e}");
        }
    }

    /// Apply every resolution that has arrived so far, in arrival order
    pub fn apply_resolved(&mut self, store: &mut SheetStore) -> Vec<PollOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(resolution) = self.resolved_rx.try_recv() {
            outcomes.push(Self::apply(resolution, store));
        }
        outcomes
    }

    /// Block up to `timeout` for the next resolution and apply it
    pub fn apply_next(&mut self, store: &mut SheetStore, timeout: Duration) -> Option<PollOutcome> {
        match self.resolved_rx.recv_timeout(timeout) {
            Ok(resolution) => Some(Self::apply(resolution, store)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn apply(resolution: FetchResolution, store: &mut SheetStore) -> PollOutcome {
        let FetchResolution {
            requested_for,
            result,
        } = resolution;

        let update = match result {
            Ok(update) if update.is_usable() => update,
            Ok(update) => {
                let e = FeedError::InvalidValue(update.latest_misc_expense);
                tracing::warn!(sheet_id = %requested_for, "Live feed fetch rejected: {e}");
                return PollOutcome::Failed(requested_for, e);
            }
            Err(e) => {
                tracing::warn!(sheet_id = %requested_for, "Live feed fetch failed: {e}");
                return PollOutcome::Failed(requested_for, e);
            }
        };

        // Re-resolve against the store as it is now
        match store.active_id() {
            Some(active) if active == requested_for => {
                store.update_live_data(active, update.into_live_data());
                tracing::debug!(
                    sheet_id = %active,
                    misc_expense = update.latest_misc_expense,
                    "Applied live feed update"
                );
                PollOutcome::Applied(active)
            }
            _ => {
                tracing::debug!(sheet_id = %requested_for, "Dropped stale live feed update");
                PollOutcome::Stale(requested_for)
            }
        }
    }
}

impl Drop for LiveFeedPoller {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        tracing::debug!(in_flight = self.in_flight(), "Live feed poller stopped");
    }
}

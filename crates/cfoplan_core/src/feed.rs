//! Live expense feed.
//!
//! A feed answers "what is the latest miscellaneous expense?" after some
//! latency. Calls block, so the poller runs them off the owner thread.

use std::time::Duration;

use rand::Rng;

use crate::error::FeedError;
use crate::model::LiveData;

/// One answer from the feed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseUpdate {
    pub latest_misc_expense: f64,
    pub timestamp: jiff::Timestamp,
}

impl ExpenseUpdate {
    /// Expenses are finite and never negative
    pub fn is_usable(&self) -> bool {
        self.latest_misc_expense.is_finite() && self.latest_misc_expense >= 0.0
    }

    pub fn into_live_data(self) -> LiveData {
        LiveData {
            latest_misc_expense: self.latest_misc_expense,
            last_updated: Some(self.timestamp),
        }
    }
}

/// Source of miscellaneous expense updates
pub trait ExpenseFeed: Send + Sync {
    /// Fetch the latest value. May block for the feed's latency.
    fn fetch_latest_expense_update(&self) -> Result<ExpenseUpdate, FeedError>;
}

/// Stand-in feed: waits `latency`, then answers a uniformly random whole
/// amount in `min..max`.
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    latency: Duration,
    min: u32,
    max: u32,
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(2_500),
            min: 5_000,
            max: 25_000,
        }
    }
}

impl SimulatedFeed {
    pub fn new(latency: Duration, min: u32, max: u32) -> Self {
        Self { latency, min, max }
    }
}

impl ExpenseFeed for SimulatedFeed {
    fn fetch_latest_expense_update(&self) -> Result<ExpenseUpdate, FeedError> {
        if self.min >= self.max {
            return Err(FeedError::Unavailable(format!(
                "empty value range {}..{}",
                self.min, self.max
            )));
        }

        std::thread::sleep(self.latency);

        let value = rand::rng().random_range(self.min..self.max);
        Ok(ExpenseUpdate {
            latest_misc_expense: f64::from(value),
            timestamp: jiff::Timestamp::now(),
        })
    }
}

//! Once-per-day threshold trigger.
//!
//! A [`DailyOnceScheduler`] fires the first time the clock reaches a decimal
//! hour threshold each day, then stays quiet until the next calendar day.
//! Construction seeds the state from the current time: starting the process
//! after the threshold has already passed counts as fired, so a restart at
//! noon does not re-run a morning action.

use chrono::{Local, NaiveDate};

use crate::utils::decimal_hour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerState {
    /// Waiting for the threshold.
    Armed,
    /// Fired on the recorded day; re-arms when the day changes.
    FiredOn(NaiveDate),
}

/// Fires once per calendar day when the clock passes a threshold hour.
#[derive(Debug)]
pub struct DailyOnceScheduler {
    threshold: f64,
    state: TriggerState,
}

impl DailyOnceScheduler {
    /// Trigger for `threshold` (a decimal hour), seeded from the wall clock.
    pub fn new(threshold: f64) -> DailyOnceScheduler {
        let now = Local::now();
        DailyOnceScheduler::new_at(threshold, decimal_hour(now.time()), now.date_naive())
    }

    /// Trigger seeded from an explicit time, for callers that control the
    /// clock.
    pub fn new_at(threshold: f64, now: f64, today: NaiveDate) -> DailyOnceScheduler {
        let state = if now >= threshold {
            TriggerState::FiredOn(today)
        } else {
            TriggerState::Armed
        };
        DailyOnceScheduler { threshold, state }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Poll against the wall clock. Returns true when the trigger fires.
    pub fn tick(&mut self) -> bool {
        let now = Local::now();
        self.tick_at(decimal_hour(now.time()), now.date_naive())
    }

    /// Poll at an explicit time. Returns true when the trigger fires.
    ///
    /// A day change re-arms the trigger before the threshold comparison, so
    /// one call is enough to both roll the day over and fire.
    pub fn tick_at(&mut self, now: f64, today: NaiveDate) -> bool {
        if let TriggerState::FiredOn(day) = self.state {
            if day != today {
                self.state = TriggerState::Armed;
            }
        }
        if self.state == TriggerState::Armed && now >= self.threshold {
            self.state = TriggerState::FiredOn(today);
            return true;
        }
        false
    }
}

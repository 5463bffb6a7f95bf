//! Polling engine that announces schedule value changes.
//!
//! The engine wraps a [`CyclicInterpolator`] and remembers the last value it
//! reported. Each tick evaluates the schedule and yields the fresh value
//! only when it differs from the previous one, so a caller polling every few
//! seconds forwards a change downstream (a light, a pipe, a log line) only
//! when there is one. The first tick always yields: whatever consumes the
//! values starts out unsynchronized.

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::schedule::CyclicInterpolator;
use crate::solar::{EventSource, SolarEventProvider};
use crate::utils::decimal_hour;

pub struct ScheduleEngine<S = SolarEventProvider> {
    interpolator: CyclicInterpolator<S>,
    last_value: Option<f64>,
}

impl<S: EventSource> ScheduleEngine<S> {
    pub fn new(interpolator: CyclicInterpolator<S>) -> Self {
        ScheduleEngine {
            interpolator,
            last_value: None,
        }
    }

    /// Last value reported by a tick, if any tick has succeeded yet.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Evaluate at the current wall-clock time, reporting a changed value.
    pub fn tick(&mut self) -> Result<Option<f64>> {
        let now = Local::now();
        self.tick_at(decimal_hour(now.time()), now.date_naive())
    }

    /// Evaluate at an explicit time, reporting a changed value.
    ///
    /// Returns `Ok(Some(value))` when the schedule value differs from the
    /// last reported one (always on the first successful tick), `Ok(None)`
    /// when it is unchanged. Evaluation errors pass through untouched; a
    /// failed tick reports nothing and does not disturb the comparison
    /// state.
    pub fn tick_at(&mut self, now: f64, date: NaiveDate) -> Result<Option<f64>> {
        let value = self.interpolator.evaluate_at(now, date)?;
        if self.last_value == Some(value) {
            Ok(None)
        } else {
            self.last_value = Some(value);
            Ok(Some(value))
        }
    }
}

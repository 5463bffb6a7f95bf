//! Cyclic piecewise-linear interpolation over a day's control points.
//!
//! A schedule is an ordered list of [`ControlPoint`]s: a [`TimeSpec`] paired
//! with a target value. Evaluating the schedule resolves every point for the
//! query date, then interpolates linearly between the two points bracketing
//! the current hour. The 24-hour wraparound is handled by expanding the
//! resolved points across three consecutive cycles, so a segment like
//! `23:00 -> 02:00` is interpolated across midnight instead of jumping.
//!
//! Solar-relative points mean the resolved hours can differ from day to day;
//! the order of the resolved points is therefore re-checked on every
//! evaluation, and a crossing is reported as an error instead of being
//! silently reordered.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::solar::{EventSource, GeoLocation, SolarEventProvider};
use crate::timespec::TimeSpec;
use crate::utils::{decimal_hour, interpolate_f64};

/// One point of the schedule curve: when, and what value to hold there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub time: TimeSpec,
    pub value: f64,
}

impl ControlPoint {
    pub fn new(time: TimeSpec, value: f64) -> ControlPoint {
        ControlPoint { time, value }
    }
}

/// Piecewise-linear interpolator over a cyclic 24-hour timeline.
///
/// Generic over the [`EventSource`] so tests can pin solar events to fixed
/// hours. Production code uses [`CyclicInterpolator::for_location`], which
/// wires in the astronomical [`SolarEventProvider`].
#[derive(Debug)]
pub struct CyclicInterpolator<S = SolarEventProvider> {
    source: S,
    points: Vec<ControlPoint>,
}

impl CyclicInterpolator<SolarEventProvider> {
    /// Interpolator for a fixed location, computing solar events on demand.
    pub fn for_location(location: GeoLocation, points: Vec<ControlPoint>) -> Self {
        CyclicInterpolator::new(SolarEventProvider::new(location), points)
    }
}

impl<S: EventSource> CyclicInterpolator<S> {
    pub fn new(source: S, points: Vec<ControlPoint>) -> Self {
        CyclicInterpolator { source, points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Evaluate the schedule at the current wall-clock time.
    pub fn evaluate(&mut self) -> Result<f64> {
        let now = Local::now();
        self.evaluate_at(decimal_hour(now.time()), now.date_naive())
    }

    /// Evaluate the schedule at decimal hour `now` on `date`.
    ///
    /// `now` is wrapped into [0.0, 24.0) first. The result always lies
    /// between the smallest and largest control point value.
    pub fn evaluate_at(&mut self, now: f64, date: NaiveDate) -> Result<f64> {
        let resolved = self.resolved_points(date)?;
        interpolate_cyclic(&resolved, now.rem_euclid(24.0))
    }

    /// Resolve every control point to a concrete `(hour, value)` pair for
    /// `date`, in schedule order.
    ///
    /// Fails with [`Error::UnorderedControlPoints`] when the resolved hours
    /// are not strictly ascending. The check runs on every call: a schedule
    /// that is fine in June can cross order in December once its
    /// solar-relative points have drifted far enough.
    pub fn resolved_points(&mut self, date: NaiveDate) -> Result<Vec<(f64, f64)>> {
        let mut resolved = Vec::with_capacity(self.points.len());
        for point in &self.points {
            resolved.push((point.time.resolve(&mut self.source, date)?, point.value));
        }
        for pair in resolved.windows(2) {
            if pair[0].0 >= pair[1].0 {
                return Err(Error::UnorderedControlPoints(pair[0].0, pair[1].0));
            }
        }
        Ok(resolved)
    }
}

/// Interpolate over resolved points copied across three consecutive cycles.
///
/// The expansion places every point at its hour minus 24, its own hour, and
/// its hour plus 24 (in that block order). Scanning the expansion for the
/// first point past `now` then always finds the true neighbors of the query,
/// even when the bracketing segment spans midnight.
fn interpolate_cyclic(resolved: &[(f64, f64)], now: f64) -> Result<f64> {
    let mut expanded = Vec::with_capacity(resolved.len() * 3);
    for shift in [-24.0, 0.0, 24.0] {
        expanded.extend(resolved.iter().map(|&(hour, value)| (hour + shift, value)));
    }

    let mut previous: Option<(f64, f64)> = None;
    let mut next: Option<(f64, f64)> = None;
    for &(hour, value) in &expanded {
        if hour > now {
            next = Some((hour, value));
            break;
        }
        previous = Some((hour, value));
    }

    match (previous, next) {
        (Some((t0, v0)), Some((t1, v1))) => {
            Ok(interpolate_f64(v0, v1, (now - t0) / (t1 - t0)))
        }
        // Query before every expanded point: hold the first value.
        (None, Some((_, value))) => Ok(value),
        // Query past every expanded point: hold the last value.
        (Some((_, value)), None) => Ok(value),
        (None, None) => Err(Error::EmptySchedule),
    }
}

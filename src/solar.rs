//! Solar event calculations with a per-day cache.
//!
//! This module computes the wall-clock times of solar events (civil dawn,
//! sunrise, solar noon, sunset, civil dusk) from geographic coordinates and
//! converts them to decimal local hours. Results are cached per calendar
//! date: the first query of a new day recomputes the full event set in one
//! step, so a schedule evaluated every few seconds costs one astronomical
//! calculation per day.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt;
use sunrise::{Coordinates, DawnType, SolarDay};

use crate::error::{Error, Result};
use crate::utils::decimal_hour;

/// Daylight span below this is treated as polar night.
const MIN_DAYLIGHT_MINUTES: i64 = 1;
/// Daylight span above this is treated as polar day.
const MAX_DAYLIGHT_MINUTES: i64 = 23 * 60 + 59;
/// Civil twilight durations outside (0, 180] minutes mean the sun never
/// reaches 6° below the horizon on that date.
const MAX_TWILIGHT_MINUTES: i64 = 180;

/// A solar event whose wall-clock time shifts with the calendar and the
/// observer's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Civil dawn: the sun climbs past 6° below the horizon.
    Dawn,
    /// The upper edge of the sun crosses the horizon while rising.
    Sunrise,
    /// Solar noon, taken as the midpoint of sunrise and sunset.
    Noon,
    /// The upper edge of the sun crosses the horizon while setting.
    Sunset,
    /// Civil dusk: the sun drops past 6° below the horizon.
    Dusk,
}

impl SolarEvent {
    /// All events in chronological order on an ordinary day.
    pub const ALL: [SolarEvent; 5] = [
        SolarEvent::Dawn,
        SolarEvent::Sunrise,
        SolarEvent::Noon,
        SolarEvent::Sunset,
        SolarEvent::Dusk,
    ];

    /// Lowercase name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            SolarEvent::Dawn => "dawn",
            SolarEvent::Sunrise => "sunrise",
            SolarEvent::Noon => "noon",
            SolarEvent::Sunset => "sunset",
            SolarEvent::Dusk => "dusk",
        }
    }

    /// Parse an event name as written in configuration files.
    pub fn from_name(name: &str) -> Option<SolarEvent> {
        match name {
            "dawn" => Some(SolarEvent::Dawn),
            "sunrise" => Some(SolarEvent::Sunrise),
            "noon" => Some(SolarEvent::Noon),
            "sunset" => Some(SolarEvent::Sunset),
            "dusk" => Some(SolarEvent::Dusk),
            _ => None,
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated observer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geographic latitude in degrees, positive north.
    pub latitude: f64,
    /// Geographic longitude in degrees, positive east.
    pub longitude: f64,
    /// Observer elevation above sea level in meters.
    pub elevation: f64,
}

impl GeoLocation {
    /// Create a location, rejecting coordinates outside the valid range.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation(latitude, longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }
}

/// The five solar event times for one calendar date, as decimal local hours.
///
/// An event that does not occur on the date is stored as `None`. During
/// polar day and polar night the whole set is absent; at high latitudes
/// around the solstices dawn and dusk can be absent on their own while the
/// sun still rises and sets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarEventSet {
    pub dawn: Option<f64>,
    pub sunrise: Option<f64>,
    pub noon: Option<f64>,
    pub sunset: Option<f64>,
    pub dusk: Option<f64>,
}

impl SolarEventSet {
    pub fn get(&self, event: SolarEvent) -> Option<f64> {
        match event {
            SolarEvent::Dawn => self.dawn,
            SolarEvent::Sunrise => self.sunrise,
            SolarEvent::Noon => self.noon,
            SolarEvent::Sunset => self.sunset,
            SolarEvent::Dusk => self.dusk,
        }
    }
}

/// Per-day cache of solar event times.
///
/// The cache holds at most one day of results and is refreshed through
/// [`refresh_if_stale`](SolarDayCache::refresh_if_stale): asking about a
/// date other than the cached one recomputes the full event set and replaces
/// it in a single step, so callers never observe a half-updated day. On a
/// calculation error the previous state is kept.
#[derive(Debug, Clone, Default)]
pub struct SolarDayCache {
    computed_for: Option<NaiveDate>,
    events: SolarEventSet,
}

impl SolarDayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Date the cached event set was computed for, if any.
    pub fn computed_for(&self) -> Option<NaiveDate> {
        self.computed_for
    }

    /// Return the event set for `date`, recomputing it first when the cache
    /// holds a different date.
    ///
    /// The local timezone offset is captured fresh on every recomputation,
    /// so DST transitions take effect the day they happen.
    pub fn refresh_if_stale(
        &mut self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Result<&SolarEventSet> {
        if self.computed_for != Some(date) {
            self.events = compute_event_set(location, date)?;
            self.computed_for = Some(date);
        }
        Ok(&self.events)
    }
}

/// Source of solar event times, keyed by event and date.
///
/// The scheduling core is generic over this trait so tests can substitute
/// fixed event times for the astronomical calculation.
pub trait EventSource {
    /// Decimal local hour at which `event` occurs on `date`.
    ///
    /// Fails with [`Error::EventUndefinedForDate`] when the event does not
    /// occur on that date.
    fn event_time(&mut self, event: SolarEvent, date: NaiveDate) -> Result<f64>;
}

/// Solar event source backed by astronomical calculation and a
/// [`SolarDayCache`].
#[derive(Debug)]
pub struct SolarEventProvider {
    location: GeoLocation,
    cache: SolarDayCache,
}

impl SolarEventProvider {
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location,
            cache: SolarDayCache::new(),
        }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Full event set for `date`, refreshing the cache if needed.
    ///
    /// Unlike [`EventSource::event_time`] this does not treat an absent
    /// event as an error, which makes it suitable for preview output.
    pub fn events_for(&mut self, date: NaiveDate) -> Result<SolarEventSet> {
        Ok(*self.cache.refresh_if_stale(&self.location, date)?)
    }
}

impl EventSource for SolarEventProvider {
    fn event_time(&mut self, event: SolarEvent, date: NaiveDate) -> Result<f64> {
        let events = self.cache.refresh_if_stale(&self.location, date)?;
        events
            .get(event)
            .ok_or(Error::EventUndefinedForDate(event, date))
    }
}

/// Compute all five event times for one date at one location.
///
/// Event instants come back from the astronomical calculation in UTC and are
/// converted to the process's local timezone per instant before being turned
/// into decimal hours.
fn compute_event_set(location: &GeoLocation, date: NaiveDate) -> Result<SolarEventSet> {
    let coord = Coordinates::new(location.latitude, location.longitude)
        .ok_or(Error::InvalidLocation(location.latitude, location.longitude))?;
    let solar_day = SolarDay::new(coord, date).with_altitude(location.elevation);

    let sunrise_utc = solar_day.event_time(sunrise::SolarEvent::Sunrise);
    let sunset_utc = solar_day.event_time(sunrise::SolarEvent::Sunset);

    // When the sun never crosses the horizon the calculation collapses the
    // daylight span toward zero or the full day. Both mean no event occurs.
    let daylight_minutes = (sunset_utc - sunrise_utc).num_minutes();
    if !(MIN_DAYLIGHT_MINUTES..=MAX_DAYLIGHT_MINUTES).contains(&daylight_minutes) {
        return Ok(SolarEventSet::default());
    }

    let noon_utc = sunrise_utc + (sunset_utc - sunrise_utc) / 2;

    let mut events = SolarEventSet {
        dawn: None,
        sunrise: Some(local_decimal_hour(sunrise_utc)),
        noon: Some(local_decimal_hour(noon_utc)),
        sunset: Some(local_decimal_hour(sunset_utc)),
        dusk: None,
    };

    // Civil twilight fails independently at high latitudes around the
    // solstices: the sun sets but never reaches 6° below the horizon.
    // Implausible twilight durations mark the event absent.
    let dawn_utc = solar_day.event_time(sunrise::SolarEvent::Dawn(DawnType::Civil));
    let morning_twilight_minutes = (sunrise_utc - dawn_utc).num_minutes();
    if (1..=MAX_TWILIGHT_MINUTES).contains(&morning_twilight_minutes) {
        events.dawn = Some(local_decimal_hour(dawn_utc));
    }

    let dusk_utc = solar_day.event_time(sunrise::SolarEvent::Dusk(DawnType::Civil));
    let evening_twilight_minutes = (dusk_utc - sunset_utc).num_minutes();
    if (1..=MAX_TWILIGHT_MINUTES).contains(&evening_twilight_minutes) {
        events.dusk = Some(local_decimal_hour(dusk_utc));
    }

    Ok(events)
}

fn local_decimal_hour(instant: DateTime<Utc>) -> f64 {
    decimal_hour(instant.with_timezone(&Local).time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;

    fn budapest() -> GeoLocation {
        GeoLocation::new(TEST_LATITUDE, TEST_LONGITUDE, 0.0).unwrap()
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(GeoLocation::new(47.0, 19.0, 0.0).is_ok());
        assert!(GeoLocation::new(90.0, 180.0, 0.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0, 500.0).is_ok());

        assert_eq!(
            GeoLocation::new(91.0, 0.0, 0.0),
            Err(Error::InvalidLocation(91.0, 0.0))
        );
        assert_eq!(
            GeoLocation::new(0.0, 181.0, 0.0),
            Err(Error::InvalidLocation(0.0, 181.0))
        );
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_event_names_round_trip() {
        for event in SolarEvent::ALL {
            assert_eq!(SolarEvent::from_name(event.name()), Some(event));
        }
        assert_eq!(SolarEvent::from_name("midnight"), None);
    }

    #[test]
    fn test_midsummer_midlatitude_has_all_events() {
        let mut provider = SolarEventProvider::new(budapest());
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let events = provider.events_for(date).unwrap();

        for event in SolarEvent::ALL {
            let hour = events
                .get(event)
                .unwrap_or_else(|| panic!("{event} should occur on {date}"));
            assert!((0.0..24.0).contains(&hour), "{event} out of range: {hour}");
        }
    }

    #[test]
    fn test_cache_recomputes_only_on_day_change() {
        let mut cache = SolarDayCache::new();
        assert_eq!(cache.computed_for(), None);

        let location = budapest();
        let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let december = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();

        let summer = *cache.refresh_if_stale(&location, june).unwrap();
        assert_eq!(cache.computed_for(), Some(june));

        // Same date again returns the identical cached set.
        let again = *cache.refresh_if_stale(&location, june).unwrap();
        assert_eq!(summer, again);

        // A new date replaces the whole set.
        let winter = *cache.refresh_if_stale(&location, december).unwrap();
        assert_eq!(cache.computed_for(), Some(december));
        assert_ne!(summer.sunrise, winter.sunrise);
    }

    #[test]
    fn test_provider_event_times_follow_the_season() {
        let mut provider = SolarEventProvider::new(budapest());
        let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let december = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();

        let summer_sunrise = provider.event_time(SolarEvent::Sunrise, june).unwrap();
        let winter_sunrise = provider.event_time(SolarEvent::Sunrise, december).unwrap();
        assert_ne!(summer_sunrise, winter_sunrise);
    }

    #[test]
    fn test_polar_night_leaves_events_undefined() {
        let svalbard = GeoLocation::new(85.0, 15.0, 0.0).unwrap();
        let mut provider = SolarEventProvider::new(svalbard);
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();

        let events = provider.events_for(date).unwrap();
        assert_eq!(events, SolarEventSet::default());

        assert_eq!(
            provider.event_time(SolarEvent::Sunrise, date),
            Err(Error::EventUndefinedForDate(SolarEvent::Sunrise, date))
        );
    }

    #[test]
    fn test_polar_day_leaves_events_undefined() {
        let svalbard = GeoLocation::new(85.0, 15.0, 0.0).unwrap();
        let mut provider = SolarEventProvider::new(svalbard);
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        assert_eq!(
            provider.event_time(SolarEvent::Noon, date),
            Err(Error::EventUndefinedForDate(SolarEvent::Noon, date))
        );
    }

    #[test]
    fn test_failed_refresh_keeps_previous_state() {
        // Bypasses GeoLocation::new to reach the calculation with bad input.
        let good = budapest();
        let bad = GeoLocation {
            latitude: 200.0,
            longitude: 0.0,
            elevation: 0.0,
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2024, 6, 22).unwrap();

        let mut cache = SolarDayCache::new();
        cache.refresh_if_stale(&good, date).unwrap();
        assert!(cache.refresh_if_stale(&bad, next_day).is_err());
        assert_eq!(cache.computed_for(), Some(date));
    }
}

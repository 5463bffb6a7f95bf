//! Time-of-day values that are either fixed or anchored to a solar event.
//!
//! A [`TimeSpec`] is the time half of a schedule control point. Absolute
//! specs are plain decimal hours and never touch the solar calculation;
//! relative specs name a solar event plus a signed offset in hours and
//! resolve to a different decimal hour each day.
//!
//! The textual form used in configuration files round-trips through
//! [`FromStr`]/[`Display`]: `"2"`, `"7.25"`, `"sunrise"`, `"sunrise - 0.5"`,
//! `"sunset + 1"`.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::solar::{EventSource, SolarEvent};

/// A time of day, fixed or solar-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSpec {
    /// A fixed decimal hour. Values at or past 24.0 are legal and refer to
    /// the same hour of the next cycle, which lets a schedule close its day
    /// with an explicit wrap point.
    Absolute { hour: f64 },
    /// A solar event shifted by a signed number of hours.
    Relative { event: SolarEvent, offset: f64 },
}

impl TimeSpec {
    /// Fixed decimal hour.
    pub fn absolute(hour: f64) -> TimeSpec {
        TimeSpec::Absolute { hour }
    }

    /// Solar event shifted by `offset` hours.
    pub fn relative(event: SolarEvent, offset: f64) -> TimeSpec {
        TimeSpec::Relative { event, offset }
    }

    /// Solar event with no offset.
    pub fn at_event(event: SolarEvent) -> TimeSpec {
        TimeSpec::Relative { event, offset: 0.0 }
    }

    /// A copy of this spec shifted `delta` hours later.
    pub fn plus_hours(self, delta: f64) -> TimeSpec {
        match self {
            TimeSpec::Absolute { hour } => TimeSpec::Absolute { hour: hour + delta },
            TimeSpec::Relative { event, offset } => TimeSpec::Relative {
                event,
                offset: offset + delta,
            },
        }
    }

    /// A copy of this spec shifted `delta` hours earlier.
    pub fn minus_hours(self, delta: f64) -> TimeSpec {
        self.plus_hours(-delta)
    }

    /// Resolve to a concrete decimal hour on `date`.
    ///
    /// Absolute specs never consult `source`; relative specs fail when the
    /// anchoring event does not occur on `date`.
    pub fn resolve<S: EventSource>(&self, source: &mut S, date: NaiveDate) -> Result<f64> {
        match self {
            TimeSpec::Absolute { hour } => Ok(*hour),
            TimeSpec::Relative { event, offset } => Ok(source.event_time(*event, date)? + offset),
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpec::Absolute { hour } => write!(f, "{hour}"),
            TimeSpec::Relative { event, offset } => {
                if *offset == 0.0 {
                    write!(f, "{event}")
                } else if *offset < 0.0 {
                    write!(f, "{} - {}", event, -offset)
                } else {
                    write!(f, "{} + {}", event, offset)
                }
            }
        }
    }
}

impl FromStr for TimeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<TimeSpec> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidTimeSpec(s.to_string()));
        }
        // "nan" and "inf" parse as f64 but are useless as hours.
        if let Ok(hour) = trimmed.parse::<f64>() {
            if hour.is_finite() {
                return Ok(TimeSpec::absolute(hour));
            }
            return Err(Error::InvalidTimeSpec(s.to_string()));
        }

        // Event name, optionally followed by a signed offset in hours.
        let name_end = trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (name, rest) = trimmed.split_at(name_end);
        let event = SolarEvent::from_name(&name.to_ascii_lowercase())
            .ok_or_else(|| Error::InvalidTimeSpec(s.to_string()))?;

        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(TimeSpec::at_event(event));
        }

        let (sign, magnitude_str) = match rest.split_at(1) {
            ("+", m) => (1.0, m),
            ("-", m) => (-1.0, m),
            _ => return Err(Error::InvalidTimeSpec(s.to_string())),
        };
        let magnitude: f64 = magnitude_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidTimeSpec(s.to_string()))?;
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(Error::InvalidTimeSpec(s.to_string()));
        }
        Ok(TimeSpec::relative(event, sign * magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Event source that fails every lookup. Absolute specs must resolve
    /// without touching it.
    struct NoEvents;

    impl EventSource for NoEvents {
        fn event_time(&mut self, event: SolarEvent, date: NaiveDate) -> Result<f64> {
            Err(Error::EventUndefinedForDate(event, date))
        }
    }

    struct FixedSun {
        sunrise: f64,
        sunset: f64,
    }

    impl EventSource for FixedSun {
        fn event_time(&mut self, event: SolarEvent, date: NaiveDate) -> Result<f64> {
            match event {
                SolarEvent::Sunrise => Ok(self.sunrise),
                SolarEvent::Sunset => Ok(self.sunset),
                other => Err(Error::EventUndefinedForDate(other, date)),
            }
        }
    }

    fn any_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
    }

    #[test]
    fn test_absolute_resolves_without_event_source() {
        let mut source = NoEvents;
        let spec = TimeSpec::absolute(7.25);
        assert_eq!(spec.resolve(&mut source, any_date()), Ok(7.25));
    }

    #[test]
    fn test_relative_resolves_event_plus_offset() {
        let mut source = FixedSun {
            sunrise: 6.0,
            sunset: 18.0,
        };
        let date = any_date();

        let spec = TimeSpec::at_event(SolarEvent::Sunrise).minus_hours(0.5);
        assert_eq!(spec.resolve(&mut source, date), Ok(5.5));

        let spec = TimeSpec::at_event(SolarEvent::Sunset).plus_hours(1.0);
        assert_eq!(spec.resolve(&mut source, date), Ok(19.0));
    }

    #[test]
    fn test_relative_fails_when_event_is_undefined() {
        let mut source = NoEvents;
        let date = any_date();
        let spec = TimeSpec::at_event(SolarEvent::Sunrise);
        assert_eq!(
            spec.resolve(&mut source, date),
            Err(Error::EventUndefinedForDate(SolarEvent::Sunrise, date))
        );
    }

    #[test]
    fn test_shift_composes_on_both_variants() {
        let spec = TimeSpec::absolute(10.0).plus_hours(1.5).minus_hours(0.5);
        assert_eq!(spec, TimeSpec::absolute(11.0));

        let spec = TimeSpec::at_event(SolarEvent::Noon)
            .minus_hours(2.0)
            .plus_hours(0.5);
        assert_eq!(spec, TimeSpec::relative(SolarEvent::Noon, -1.5));
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!("2".parse(), Ok(TimeSpec::absolute(2.0)));
        assert_eq!("7.25".parse(), Ok(TimeSpec::absolute(7.25)));
        assert_eq!("24".parse(), Ok(TimeSpec::absolute(24.0)));
        assert_eq!(" 23 ".parse(), Ok(TimeSpec::absolute(23.0)));
    }

    #[test]
    fn test_parse_relative() {
        assert_eq!("sunrise".parse(), Ok(TimeSpec::at_event(SolarEvent::Sunrise)));
        assert_eq!(
            "sunrise - 0.5".parse(),
            Ok(TimeSpec::relative(SolarEvent::Sunrise, -0.5))
        );
        assert_eq!(
            "sunset+1".parse(),
            Ok(TimeSpec::relative(SolarEvent::Sunset, 1.0))
        );
        assert_eq!(
            "dawn+0.5".parse(),
            Ok(TimeSpec::relative(SolarEvent::Dawn, 0.5))
        );
        assert_eq!("Noon".parse(), Ok(TimeSpec::at_event(SolarEvent::Noon)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "",
            "midnight",
            "sunrise * 2",
            "sunset -",
            "sunset - x",
            "sunset - -1",
            "nan",
            "sunrise + inf",
        ] {
            assert_eq!(
                bad.parse::<TimeSpec>(),
                Err(Error::InvalidTimeSpec(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        let specs = [
            TimeSpec::absolute(2.0),
            TimeSpec::absolute(7.25),
            TimeSpec::at_event(SolarEvent::Sunrise),
            TimeSpec::relative(SolarEvent::Sunrise, -0.5),
            TimeSpec::relative(SolarEvent::Sunset, 1.0),
            TimeSpec::relative(SolarEvent::Dusk, 2.75),
        ];
        for spec in specs {
            let rendered = spec.to_string();
            assert_eq!(rendered.parse(), Ok(spec), "{rendered:?} should round-trip");
        }
    }
}

//! Application constants and default values for daycurve.
//!
//! This module contains all the configuration defaults, validation limits,
//! and operational constants used throughout the application.

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_LATITUDE: f64 = 47.402339; // Degrees north
pub const DEFAULT_LONGITUDE: f64 = 19.251788; // Degrees east
pub const DEFAULT_ELEVATION: f64 = 0.0; // Meters above sea level
pub const DEFAULT_POLL_INTERVAL: u64 = 5; // seconds - how often the schedule is re-evaluated
pub const DEFAULT_MORNING_TRIGGER: f64 = 8.5; // Decimal hour (08:30)

/// Default schedule: a mired color temperature curve. Warm (417 mired,
/// about 2400K) through the night, cold (179 mired, about 5600K) across the
/// working day, with ramps pinned to sunrise and sunset.
pub const DEFAULT_SCHEDULE: &[(&str, f64)] = &[
    ("2", 417.0),
    ("sunrise - 0.5", 370.0),
    ("sunrise + 0.5", 179.0),
    ("sunset - 1", 179.0),
    ("sunset", 370.0),
    ("23", 370.0),
    ("24", 417.0),
];

// ═══ Validation Limits ═══
// These limits ensure user inputs are within reasonable and safe ranges

// Poll interval limits
pub const MINIMUM_POLL_INTERVAL: u64 = 1; // seconds (prevents busy-looping)
pub const MAXIMUM_POLL_INTERVAL: u64 = 300; // seconds (5 minutes max before the curve gets visibly steppy)

// Elevation limits (meters)
pub const MINIMUM_ELEVATION: f64 = -500.0; // Below the Dead Sea shore
pub const MAXIMUM_ELEVATION: f64 = 9000.0; // Above Everest

// Schedule shape limits
pub const MINIMUM_CONTROL_POINTS: usize = 2; // A single point is a flat line; two make a curve

// ═══ Operational Timing Constants ═══
// Internal timing values for application operation

pub const SLEEP_DETECTION_THRESHOLD_SECS: u64 = 300; // 5 minutes - detect system sleep/resume
pub const CHECK_INTERVAL_SECS: u64 = 1; // How often to check the running flag during sleep

// ═══ Exit Codes ═══
// Standard exit codes for process termination

pub const EXIT_FAILURE: i32 = 1; // General failure

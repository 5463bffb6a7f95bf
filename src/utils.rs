//! Utility functions shared across the codebase.
//!
//! This module provides common functionality for interpolation and decimal
//! time handling used throughout the application.

use chrono::{NaiveTime, Timelike};
use std::path::Path;

/// Interpolate between two f64 values based on progress (0.0 to 1.0).
///
/// This function provides smooth transitions between floating-point values,
/// used for all value interpolation along the schedule curve.
///
/// # Arguments
/// * `start` - Starting value (returned when progress = 0.0)
/// * `end` - Ending value (returned when progress = 1.0)
/// * `progress` - Interpolation progress, automatically clamped to [0.0, 1.0]
///
/// # Returns
/// Interpolated floating-point value
///
/// # Examples
/// ```
/// use daycurve::utils::interpolate_f64;
/// assert_eq!(interpolate_f64(100.0, 200.0, 0.5), 150.0);
/// assert_eq!(interpolate_f64(200.0, 100.0, 0.3), 170.0);
/// ```
pub fn interpolate_f64(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress.clamp(0.0, 1.0)
}

/// Convert a wall-clock time to a decimal hour of day in [0.0, 24.0).
///
/// `06:30:00` becomes `6.5`. Sub-second precision is discarded.
///
/// # Arguments
/// * `time` - Wall-clock time of day
///
/// # Returns
/// Decimal hour of day, always in [0.0, 24.0)
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use daycurve::utils::decimal_hour;
/// let time = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
/// assert_eq!(decimal_hour(time), 6.5);
/// ```
pub fn decimal_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// Format a decimal hour as `HH:MM` for display.
///
/// The hour is wrapped into [0.0, 24.0) first, so event offsets that spill
/// past midnight still render as a clock time.
///
/// # Examples
/// ```
/// use daycurve::utils::format_decimal_hour;
/// assert_eq!(format_decimal_hour(8.5), "08:30");
/// assert_eq!(format_decimal_hour(25.5), "01:30");
/// ```
pub fn format_decimal_hour(hour: f64) -> String {
    let total_minutes = (hour.rem_euclid(24.0) * 60.0).round() as u32;
    format!("{:02}:{:02}", (total_minutes / 60) % 24, total_minutes % 60)
}

/// Render a path with the home directory abbreviated to `~` for log output.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

//! # Daycurve
//!
//! A solar-anchored daily value scheduler.
//!
//! Daycurve evaluates a user-defined value curve over the 24-hour day. Control
//! points are anchored either to fixed clock times or to solar events (dawn,
//! sunrise, noon, sunset, dusk) computed for a configured location, and the
//! value between points is linearly interpolated, wrapping across midnight.
//!
//! ## Architecture
//!
//! - **args**: Command-line argument parsing
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Application-wide constants and defaults
//! - **daily**: Once-a-day threshold trigger
//! - **engine**: Polling engine that reports schedule value changes
//! - **error**: Library error types
//! - **logger**: Structured logging with visual formatting
//! - **schedule**: Cyclic piecewise-linear interpolation over control points
//! - **solar**: Solar event calculation, caching, and the event source seam
//! - **timespec**: Control point times, fixed or solar-relative
//! - **utils**: Utility functions for interpolation and time formatting

pub mod args;
pub mod config;
pub mod constants;
pub mod daily;
pub mod engine;
pub mod error;
pub mod logger;
pub mod schedule;
pub mod solar;
pub mod timespec;
pub mod utils;

// Re-export important types for easier access
pub use config::{Config, validate_config};
pub use daily::DailyOnceScheduler;
pub use engine::ScheduleEngine;
pub use error::{Error, Result};
pub use logger::{Log, LogLevel};
pub use schedule::{ControlPoint, CyclicInterpolator};
pub use solar::{EventSource, GeoLocation, SolarEvent, SolarEventProvider, SolarEventSet};
pub use timespec::TimeSpec;

//! Configuration system for daycurve with validation and default generation.
//!
//! This module provides configuration management for the daycurve application,
//! handling the TOML-based configuration file, validation, and default value
//! generation.
//!
//! ## Configuration Structure
//!
//! The configuration combines the observer's location with the schedule's
//! control points:
//!
//! ```toml
//! # Observer location for solar event calculation
//! latitude = 47.402339              # Geographic coordinates
//! longitude = 19.251788
//! elevation = 0.0                   # Meters above sea level
//!
//! # Engine behavior
//! poll_interval = 5                 # Seconds between schedule evaluations
//! morning_trigger = 8.5             # Daily trigger at 08:30; remove to disable
//!
//! # Schedule control points, in ascending time order
//! [[point]]
//! time = "2"                        # Fixed decimal hour
//! value = 417.0
//!
//! [[point]]
//! time = "sunrise - 0.5"            # Half an hour before sunrise
//! value = 370.0
//! ```
//!
//! ## Validation and Error Handling
//!
//! The configuration is validated during loading:
//! - **Range validation**: latitude (-90 to 90), longitude (-180 to 180),
//!   elevation, poll interval, morning trigger hour
//! - **Time spec validation**: every control point time must parse
//! - **Logical validation**: at least two control points, and fixed hours
//!   listed in ascending order
//!
//! Solar-relative points can only be fully ordered once a date is known, so
//! the final strict-ascending check happens at evaluation time.
//!
//! ## Default Configuration Generation
//!
//! When no configuration file exists, a commented default file is generated
//! with the built-in mired color temperature curve.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::logger::Log;
use crate::schedule::ControlPoint;
use crate::solar::GeoLocation;
use crate::timespec::TimeSpec;
use crate::utils::format_decimal_hour;

/// One schedule control point as written in the configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct SchedulePoint {
    /// Time spec string: a decimal hour or a solar event with an optional
    /// offset, e.g. `"2"`, `"sunrise - 0.5"`, `"sunset + 1"`.
    pub time: String,
    /// Value the curve passes through at this time.
    pub value: f64,
}

/// Configuration structure for daycurve application settings.
///
/// Loaded from the `daycurve.toml` configuration file. All scalar fields are
/// optional and fall back to the built-in defaults; an empty `[[point]]`
/// list falls back to the default schedule.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub latitude: Option<f64>,  // Geographic latitude in degrees
    pub longitude: Option<f64>, // Geographic longitude in degrees
    pub elevation: Option<f64>, // Meters above sea level
    /// Seconds between schedule evaluations.
    pub poll_interval: Option<u64>,
    /// Decimal hour of the once-a-day morning trigger. Absent disables it.
    pub morning_trigger: Option<f64>,
    /// Schedule control points, in ascending time order.
    #[serde(default, rename = "point")]
    pub points: Vec<SchedulePoint>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("daycurve").join("daycurve.toml"))
    }

    /// Load the configuration, creating a default file first if none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Load from a specific path. Does not create a default config when the
    /// path does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::apply_defaults_and_validate_fields(&mut config)?;
        validate_config(&config)?;

        Ok(config)
    }

    fn apply_defaults_and_validate_fields(config: &mut Config) -> Result<()> {
        // Validate latitude if specified
        if let Some(lat) = config.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                anyhow::bail!("Latitude must be between -90 and 90 degrees (got {})", lat);
            }
            if lat.abs() > 66.0 {
                Log::log_pipe();
                Log::log_warning(&format!(
                    "Latitude {:.4}°{} is inside the polar circle",
                    lat.abs(),
                    if lat >= 0.0 { "N" } else { "S" },
                ));
                Log::log_indented(
                    "Solar-anchored control points will fail during polar day and night.",
                );
                Log::log_indented("Fixed decimal hours keep working year round.");
            }
        } else {
            config.latitude = Some(DEFAULT_LATITUDE);
        }

        // Validate longitude if specified
        if let Some(lon) = config.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!(
                    "Longitude must be between -180 and 180 degrees (got {})",
                    lon
                );
            }
        } else {
            config.longitude = Some(DEFAULT_LONGITUDE);
        }

        // Validate elevation if specified
        if let Some(elevation) = config.elevation {
            if !(MINIMUM_ELEVATION..=MAXIMUM_ELEVATION).contains(&elevation) {
                anyhow::bail!(
                    "Elevation must be between {} and {} meters (got {})",
                    MINIMUM_ELEVATION,
                    MAXIMUM_ELEVATION,
                    elevation
                );
            }
        } else {
            config.elevation = Some(DEFAULT_ELEVATION);
        }

        // Validate poll interval if specified
        if let Some(interval) = config.poll_interval {
            if !(MINIMUM_POLL_INTERVAL..=MAXIMUM_POLL_INTERVAL).contains(&interval) {
                anyhow::bail!(
                    "Poll interval must be between {} and {} seconds (got {})",
                    MINIMUM_POLL_INTERVAL,
                    MAXIMUM_POLL_INTERVAL,
                    interval
                );
            }
        } else {
            config.poll_interval = Some(DEFAULT_POLL_INTERVAL);
        }

        // The morning trigger stays disabled when absent; only validate it
        if let Some(threshold) = config.morning_trigger {
            if !(0.0..24.0).contains(&threshold) {
                anyhow::bail!(
                    "Morning trigger must be a decimal hour from 0 to 24 (got {})",
                    threshold
                );
            }
        }

        // An empty schedule falls back to the default curve
        if config.points.is_empty() {
            config.points = DEFAULT_SCHEDULE
                .iter()
                .map(|&(time, value)| SchedulePoint {
                    time: time.to_string(),
                    value,
                })
                .collect();
        }

        // Every control point time must parse and every value must be finite
        for point in &config.points {
            point
                .time
                .parse::<TimeSpec>()
                .with_context(|| format!("Invalid control point time {:?}", point.time))?;
            if !point.value.is_finite() {
                anyhow::bail!(
                    "Control point value for {:?} must be a finite number",
                    point.time
                );
            }
        }

        Ok(())
    }

    /// Create a default config file with the built-in schedule.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        // Build the config using the builder pattern
        let mut builder = ConfigBuilder::new()
            .add_section("Daycurve configuration")
            .add_setting(
                "latitude",
                &format!("{:.6}", DEFAULT_LATITUDE),
                "Geographic latitude (-90 to 90)",
            )
            .add_setting(
                "longitude",
                &format!("{:.6}", DEFAULT_LONGITUDE),
                "Geographic longitude (-180 to 180)",
            )
            .add_setting(
                "elevation",
                &format!("{:?}", DEFAULT_ELEVATION),
                "Observer elevation in meters",
            )
            .add_setting(
                "poll_interval",
                &DEFAULT_POLL_INTERVAL.to_string(),
                &format!(
                    "Seconds between schedule evaluations ({}-{})",
                    MINIMUM_POLL_INTERVAL, MAXIMUM_POLL_INTERVAL
                ),
            )
            .add_setting(
                "morning_trigger",
                &format!("{:?}", DEFAULT_MORNING_TRIGGER),
                "Decimal hour of the daily morning trigger; remove to disable",
            )
            .add_section("Schedule")
            .add_comment("Control points of the daily value curve. \"time\" is a fixed decimal")
            .add_comment("hour or a solar event with an optional offset in hours: \"2\",")
            .add_comment("\"sunrise - 0.5\", \"sunset + 1\". Resolved times must be strictly")
            .add_comment("ascending. The default values form a mired color temperature curve.");
        for &(time, value) in DEFAULT_SCHEDULE {
            builder = builder.add_point(time, value);
        }
        let config_content = builder.build();

        fs::write(path, config_content).context("Failed to write default config file")?;

        Log::log_block_start(&format!(
            "Created default configuration: {}",
            crate::utils::path_for_display(path)
        ));
        Ok(())
    }

    /// Parse the configured schedule into control points.
    pub fn control_points(&self) -> Result<Vec<ControlPoint>> {
        let mut points = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let time = point
                .time
                .parse::<TimeSpec>()
                .with_context(|| format!("Invalid control point time {:?}", point.time))?;
            points.push(ControlPoint::new(time, point.value));
        }
        Ok(points)
    }

    /// The configured observer location.
    pub fn location(&self) -> Result<GeoLocation> {
        let location = GeoLocation::new(
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
            self.elevation.unwrap_or(DEFAULT_ELEVATION),
        )?;
        Ok(location)
    }

    pub fn log_config(&self) {
        let config_path = Self::get_config_path()
            .unwrap_or_else(|_| PathBuf::from("~/.config/daycurve/daycurve.toml"));

        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            crate::utils::path_for_display(&config_path)
        ));

        let lat = self.latitude.unwrap_or(DEFAULT_LATITUDE);
        let lon = self.longitude.unwrap_or(DEFAULT_LONGITUDE);
        let lat_dir = if lat >= 0.0 { "N" } else { "S" };
        let lon_dir = if lon >= 0.0 { "E" } else { "W" };
        Log::log_indented(&format!(
            "Location: {:.4}°{}, {:.4}°{}",
            lat.abs(),
            lat_dir,
            lon.abs(),
            lon_dir
        ));
        Log::log_indented(&format!(
            "Elevation: {} m",
            self.elevation.unwrap_or(DEFAULT_ELEVATION)
        ));
        Log::log_indented(&format!(
            "Poll interval: {} seconds",
            self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL)
        ));
        match self.morning_trigger {
            Some(threshold) => Log::log_indented(&format!(
                "Morning trigger: {} ({})",
                format_decimal_hour(threshold),
                threshold
            )),
            None => Log::log_indented("Morning trigger: disabled"),
        }
        Log::log_indented(&format!("Schedule: {} control points", self.points.len()));
        for point in &self.points {
            Log::log_indented(&format!("  {} -> {}", point.time, point.value));
        }
    }
}

/// Comprehensive configuration validation to prevent impossible or
/// problematic setups.
pub fn validate_config(config: &Config) -> Result<()> {
    // 1. Coordinate and elevation ranges (hard limits)
    let latitude = config.latitude.unwrap_or(DEFAULT_LATITUDE);
    if !(-90.0..=90.0).contains(&latitude) {
        anyhow::bail!(
            "Latitude ({}) must be between -90 and 90 degrees",
            latitude
        );
    }

    let longitude = config.longitude.unwrap_or(DEFAULT_LONGITUDE);
    if !(-180.0..=180.0).contains(&longitude) {
        anyhow::bail!(
            "Longitude ({}) must be between -180 and 180 degrees",
            longitude
        );
    }

    let elevation = config.elevation.unwrap_or(DEFAULT_ELEVATION);
    if !(MINIMUM_ELEVATION..=MAXIMUM_ELEVATION).contains(&elevation) {
        anyhow::bail!(
            "Elevation ({} m) must be between {} and {} meters",
            elevation,
            MINIMUM_ELEVATION,
            MAXIMUM_ELEVATION
        );
    }

    // 2. Engine timing
    let poll_interval = config.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL);
    if !(MINIMUM_POLL_INTERVAL..=MAXIMUM_POLL_INTERVAL).contains(&poll_interval) {
        anyhow::bail!(
            "Poll interval ({} seconds) must be between {} and {} seconds",
            poll_interval,
            MINIMUM_POLL_INTERVAL,
            MAXIMUM_POLL_INTERVAL
        );
    }

    if let Some(threshold) = config.morning_trigger {
        if !(0.0..24.0).contains(&threshold) {
            anyhow::bail!(
                "Morning trigger ({}) must be a decimal hour from 0 to 24",
                threshold
            );
        }
    }

    // 3. Schedule shape
    if config.points.len() < MINIMUM_CONTROL_POINTS {
        anyhow::bail!(
            "The schedule needs at least {} control points, got {}",
            MINIMUM_CONTROL_POINTS,
            config.points.len()
        );
    }

    let mut last_absolute: Option<f64> = None;
    for point in &config.points {
        let time = point
            .time
            .parse::<TimeSpec>()
            .with_context(|| format!("Invalid control point time {:?}", point.time))?;
        if !point.value.is_finite() {
            anyhow::bail!(
                "Control point value for {:?} must be a finite number",
                point.time
            );
        }

        // Solar-relative points can only be ordered once a date is known,
        // but fixed hours must ascend among themselves no matter what the
        // solar events resolve to.
        if let TimeSpec::Absolute { hour } = time {
            if let Some(previous) = last_absolute {
                if previous >= hour {
                    anyhow::bail!(
                        "Control points must be listed in ascending time order: hour {} cannot follow {}",
                        hour,
                        previous
                    );
                }
            }
            last_absolute = Some(hour);
        }
    }

    Ok(())
}

/// Builder for generating the default configuration file content.
///
/// Handles alignment of the inline comments by calculating the maximum width
/// of all setting lines and applying consistent padding, so the generated
/// file stays tidy when defaults change in constants.rs.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Setting { line: String, comment: String },
    Raw,
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{}]", title),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{} = {}", key, value);
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {}", comment),
            },
        });
        self
    }

    fn add_comment(mut self, text: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("# {}", text),
            entry_type: EntryType::Raw,
        });
        self
    }

    fn add_raw(mut self, content: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: content.to_string(),
            entry_type: EntryType::Raw,
        });
        self
    }

    /// Add one `[[point]]` table for a schedule control point.
    fn add_point(self, time: &str, value: f64) -> Self {
        self.add_raw("")
            .add_raw("[[point]]")
            .add_raw(&format!("time = {:?}", time))
            .add_raw(&format!("value = {:?}", value))
    }

    fn build(self) -> String {
        // Calculate the maximum width of all setting lines for alignment
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // +1 for one space between setting and comment

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new()); // Empty line before new section
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
                EntryType::Raw => {
                    result.push(entry.content);
                }
            }
        }

        result.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use crate::solar::SolarEvent;
    use tempfile::TempDir;

    fn create_test_config(latitude: Option<f64>, points: &[(&str, f64)]) -> Config {
        Config {
            latitude,
            longitude: Some(19.0),
            elevation: Some(0.0),
            poll_interval: Some(TEST_POLL_INTERVAL),
            morning_trigger: Some(TEST_MORNING_TRIGGER),
            points: points
                .iter()
                .map(|&(time, value)| SchedulePoint {
                    time: time.to_string(),
                    value,
                })
                .collect(),
        }
    }

    fn default_points() -> Vec<(&'static str, f64)> {
        DEFAULT_SCHEDULE.to_vec()
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("daycurve.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_path_parses_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
latitude = 60.1699
longitude = 24.9384
elevation = 26.0
poll_interval = 10
morning_trigger = 7.5

[[point]]
time = "sunrise"
value = 200.0

[[point]]
time = "sunset"
value = 400.0
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.latitude, Some(60.1699));
        assert_eq!(config.longitude, Some(24.9384));
        assert_eq!(config.elevation, Some(26.0));
        assert_eq!(config.poll_interval, Some(10));
        assert_eq!(config.morning_trigger, Some(7.5));
        assert_eq!(config.points.len(), 2);
        assert_eq!(config.points[0].time, "sunrise");
        assert_eq!(config.points[1].value, 400.0);
    }

    #[test]
    fn test_load_from_path_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "latitude = 47.0\n");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.latitude, Some(47.0));
        assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
        assert_eq!(config.poll_interval, Some(DEFAULT_POLL_INTERVAL));
        // Absent morning trigger stays disabled rather than defaulting
        assert_eq!(config.morning_trigger, None);
        // Empty schedule falls back to the default curve
        assert_eq!(config.points.len(), DEFAULT_SCHEDULE.len());
    }

    #[test]
    fn test_load_from_path_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "latitude = [not toml");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_load_from_path_rejects_out_of_range_fields() {
        let dir = TempDir::new().unwrap();
        for content in [
            "latitude = 91.0\n",
            "longitude = -200.0\n",
            "poll_interval = 0\n",
            "poll_interval = 301\n",
            "morning_trigger = 24.0\n",
            "elevation = 20000.0\n",
        ] {
            let path = write_config(&dir, content);
            assert!(
                Config::load_from_path(&path).is_err(),
                "{content:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_config_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daycurve").join("daycurve.toml");

        Config::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.latitude, Some(DEFAULT_LATITUDE));
        assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
        assert_eq!(config.elevation, Some(DEFAULT_ELEVATION));
        assert_eq!(config.poll_interval, Some(DEFAULT_POLL_INTERVAL));
        assert_eq!(config.morning_trigger, Some(DEFAULT_MORNING_TRIGGER));

        let times: Vec<&str> = config.points.iter().map(|p| p.time.as_str()).collect();
        let expected: Vec<&str> = DEFAULT_SCHEDULE.iter().map(|&(time, _)| time).collect();
        assert_eq!(times, expected);
        let values: Vec<f64> = config.points.iter().map(|p| p.value).collect();
        let expected: Vec<f64> = DEFAULT_SCHEDULE.iter().map(|&(_, value)| value).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_validate_accepts_default_schedule() {
        let config = create_test_config(Some(47.0), &default_points());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_latitude() {
        let config = create_test_config(Some(91.0), &default_points());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_single_point() {
        let config = create_test_config(Some(47.0), &[("12", 100.0)]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_unparseable_time() {
        let config = create_test_config(Some(47.0), &[("2", 417.0), ("midnight", 370.0)]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_value() {
        let config = create_test_config(Some(47.0), &[("2", 417.0), ("5", f64::NAN)]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_descending_fixed_hours() {
        let config = create_test_config(Some(47.0), &[("10", 1.0), ("5", 2.0)]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_allows_solar_points_between_fixed_hours() {
        let config = create_test_config(
            Some(47.0),
            &[("2", 417.0), ("sunrise - 0.5", 370.0), ("23", 370.0)],
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_morning_trigger() {
        let mut config = create_test_config(Some(47.0), &default_points());
        config.morning_trigger = Some(-1.0);
        assert!(validate_config(&config).is_err());
        config.morning_trigger = Some(24.0);
        assert!(validate_config(&config).is_err());
        config.morning_trigger = None;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_control_points_parse_mixed_specs() {
        let config = create_test_config(
            Some(47.0),
            &[("2", 417.0), ("sunrise - 0.5", 370.0), ("sunset + 1", 179.0)],
        );
        let points = config.control_points().unwrap();
        assert_eq!(points[0].time, TimeSpec::absolute(2.0));
        assert_eq!(
            points[1].time,
            TimeSpec::relative(SolarEvent::Sunrise, -0.5)
        );
        assert_eq!(points[2].time, TimeSpec::relative(SolarEvent::Sunset, 1.0));
        assert_eq!(points[2].value, 179.0);
    }

    #[test]
    fn test_location_uses_defaults_when_unset() {
        let config = Config {
            latitude: None,
            longitude: None,
            elevation: None,
            poll_interval: None,
            morning_trigger: None,
            points: Vec::new(),
        };
        let location = config.location().unwrap();
        assert_eq!(location.latitude, DEFAULT_LATITUDE);
        assert_eq!(location.longitude, DEFAULT_LONGITUDE);
        assert_eq!(location.elevation, DEFAULT_ELEVATION);
    }

    #[test]
    fn test_generated_default_has_aligned_comments() {
        let content = ConfigBuilder::new()
            .add_section("Test")
            .add_setting("a", "1", "first")
            .add_setting("long_key", "22", "second")
            .build();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "#[Test]");
        let first_hash = lines[1].find('#').unwrap();
        let second_hash = lines[2].find('#').unwrap();
        assert_eq!(first_hash, second_hash);
    }
}

use anyhow::{Context, Result};
use chrono::Local;
use fs2::FileExt;
use signal_hook::{
    consts::signal::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    fs::{File, OpenOptions},
    io::{Seek, SeekFrom, Write},
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use daycurve::args::{CliAction, ParsedArgs, display_help, display_version_info};
use daycurve::config::Config;
use daycurve::constants::*;
use daycurve::daily::DailyOnceScheduler;
use daycurve::engine::ScheduleEngine;
use daycurve::logger::Log;
use daycurve::schedule::CyclicInterpolator;
use daycurve::solar::{SolarEvent, SolarEventProvider};
use daycurve::utils::{decimal_hour, format_decimal_hour};

// Constants
const CHECK_INTERVAL: Duration = Duration::from_secs(CHECK_INTERVAL_SECS);

fn main() -> Result<()> {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowVersion => {
            display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Preview { debug_enabled } => run_preview(debug_enabled),
        CliAction::Sample {
            debug_enabled,
            hour,
        } => run_sample(debug_enabled, hour),
        CliAction::Run { debug_enabled } => run(debug_enabled),
    }
}

/// Run the scheduler loop until a shutdown signal arrives.
fn run(debug_enabled: bool) -> Result<()> {
    Log::log_version();

    // Set up signal handling
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    let mut signals = Signals::new([SIGTERM, SIGINT])?;
    thread::spawn(move || {
        for signal in signals.forever() {
            Log::log_pipe();
            Log::log_info(&format!("Shutdown signal received: {:?}", signal));
            r.store(false, Ordering::SeqCst);
        }
    });

    // Create and acquire lock file. Opened without truncation so a losing
    // instance cannot wipe the holder's pid before the lock check.
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    let lock_path = format!("{}/daycurve.lock", runtime_dir);
    let mut lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    // Try to acquire exclusive lock
    if lock_file.try_lock_exclusive().is_err() {
        Log::log_error(
            "Another instance of daycurve is already running.\n\
            • Kill daycurve before restarting.",
        );
        std::process::exit(EXIT_FAILURE);
    }

    // Lock acquired, now it is safe to truncate and record our pid
    lock_file.set_len(0)?;
    lock_file.seek(SeekFrom::Start(0))?;
    writeln!(lock_file, "{}", std::process::id())?;
    lock_file.flush()?;
    Log::log_decorated("Lock acquired, starting daycurve...");

    // Load configuration and build the engine
    let config = Config::load()?;
    config.log_config();

    let location = config.location()?;
    let points = config.control_points()?;
    let interpolator = CyclicInterpolator::for_location(location, points);
    let mut engine = ScheduleEngine::new(interpolator);

    let mut morning = config.morning_trigger.map(DailyOnceScheduler::new);
    let poll_interval =
        Duration::from_secs(config.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL));

    // Evaluate once up front so a broken schedule fails before the loop
    match engine.tick() {
        Ok(Some(value)) => Log::log_block_start(&format!("Schedule value: {}", value)),
        Ok(None) => {}
        Err(e) => {
            cleanup(lock_file, &lock_path);
            return Err(e).context("initial schedule evaluation failed");
        }
    }

    let mut last_check_time = Instant::now();
    let mut loop_error: Option<anyhow::Error> = None;

    while running.load(Ordering::SeqCst) {
        // Sleep in smaller intervals to check running status
        let mut slept = Duration::from_secs(0);
        while slept < poll_interval && running.load(Ordering::SeqCst) {
            let sleep_chunk = CHECK_INTERVAL.min(poll_interval - slept);
            thread::sleep(sleep_chunk);
            slept += sleep_chunk;
        }
        if !running.load(Ordering::SeqCst) {
            break;
        }

        // Detect large time jumps (system sleep/resume scenarios). The next
        // tick picks up the correct value anyway since evaluation is purely
        // wall-clock based.
        let current_time = Instant::now();
        let time_since_last_check = current_time.duration_since(last_check_time);
        if time_since_last_check > Duration::from_secs(SLEEP_DETECTION_THRESHOLD_SECS) {
            Log::log_decorated(&format!(
                "Large time jump detected ({} minutes). System may have resumed from sleep.",
                time_since_last_check.as_secs() / 60
            ));
        }
        last_check_time = current_time;

        match engine.tick() {
            Ok(Some(value)) => {
                Log::log_block_start(&format!("Schedule value changed: {}", value));
            }
            Ok(None) => {
                if debug_enabled {
                    Log::log_debug("Schedule value unchanged");
                }
            }
            Err(e) => {
                Log::log_pipe();
                Log::log_error(&format!("Schedule evaluation failed: {}", e));
                loop_error = Some(anyhow::Error::from(e).context("schedule evaluation failed"));
                break;
            }
        }

        if let Some(trigger) = morning.as_mut() {
            if trigger.tick() {
                Log::log_block_start(&format!(
                    "Morning trigger fired (threshold {})",
                    format_decimal_hour(trigger.threshold())
                ));
            }
        }
    }

    // Ensure proper cleanup on shutdown
    Log::log_block_start("Shutting down daycurve...");
    cleanup(lock_file, &lock_path);
    Log::log_end();

    match loop_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Print today's solar events and the resolved schedule, then exit.
fn run_preview(debug_enabled: bool) -> Result<()> {
    Log::log_version();

    let config = Config::load()?;
    config.log_config();

    let location = config.location()?;
    let points = config.control_points()?;
    let mut interpolator = CyclicInterpolator::for_location(location, points);

    let today = Local::now().date_naive();

    let mut provider = SolarEventProvider::new(location);
    let events = provider.events_for(today)?;
    Log::log_block_start(&format!("Solar events for {}", today));
    for event in SolarEvent::ALL {
        match events.get(event) {
            Some(hour) => {
                let raw = if debug_enabled {
                    format!("  ({:.4})", hour)
                } else {
                    String::new()
                };
                Log::log_indented(&format!(
                    "{:<8} {}{}",
                    event.name(),
                    format_decimal_hour(hour),
                    raw
                ));
            }
            None => Log::log_indented(&format!("{:<8} not defined today", event.name())),
        }
    }

    let resolved = interpolator
        .resolved_points(today)
        .context("Failed to resolve today's schedule")?;
    Log::log_block_start(&format!(
        "Schedule for {} ({} control points)",
        today,
        resolved.len()
    ));
    for (hour, value) in resolved {
        let raw = if debug_enabled {
            format!("  ({:.4})", hour)
        } else {
            String::new()
        };
        Log::log_indented(&format!(
            "{} -> {}{}",
            format_decimal_hour(hour),
            value,
            raw
        ));
    }

    let now = decimal_hour(Local::now().time());
    let value = interpolator
        .evaluate_at(now, today)
        .context("Failed to evaluate the current schedule value")?;
    Log::log_block_start(&format!(
        "Current value at {}: {}",
        format_decimal_hour(now),
        value
    ));
    Log::log_end();
    Ok(())
}

/// Evaluate the schedule at one decimal hour and print the value.
fn run_sample(debug_enabled: bool, hour: f64) -> Result<()> {
    Log::log_version();

    let config = Config::load()?;

    let location = config.location()?;
    let points = config.control_points()?;
    let mut interpolator = CyclicInterpolator::for_location(location, points);

    let today = Local::now().date_naive();
    let value = interpolator
        .evaluate_at(hour, today)
        .with_context(|| format!("Failed to evaluate the schedule at hour {}", hour))?;

    if debug_enabled {
        let resolved = interpolator.resolved_points(today)?;
        Log::log_block_start(&format!("Resolved schedule for {}", today));
        for (point_hour, point_value) in resolved {
            Log::log_indented(&format!(
                "{} -> {}",
                format_decimal_hour(point_hour),
                point_value
            ));
        }
    }

    Log::log_block_start(&format!(
        "Value at {}: {}",
        format_decimal_hour(hour),
        value
    ));
    Log::log_end();
    Ok(())
}

/// Perform cleanup operations when shutting down the application.
///
/// Releases the lock by dropping the file handle, then removes the
/// lock file from disk.
fn cleanup(lock_file: File, lock_path: &str) {
    Log::log_decorated("Performing cleanup...");

    // Drop the lock file handle to release the lock
    drop(lock_file);

    // Remove the lock file from disk
    if let Err(e) = std::fs::remove_file(lock_path) {
        Log::log_decorated(&format!("Warning: Failed to remove lock file: {}", e));
    } else {
        Log::log_decorated("Lock file removed successfully");
    }

    Log::log_decorated("Cleanup complete");
}

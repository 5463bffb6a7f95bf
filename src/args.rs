//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

use crate::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the scheduler loop with these settings
    Run { debug_enabled: bool },
    /// Print today's solar events and resolved schedule, then exit
    Preview { debug_enabled: bool },
    /// Print the schedule value at a specific decimal hour, then exit
    Sample { debug_enabled: bool, hour: f64 },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// This function processes the arguments and determines what action should
    /// be taken, including whether to show help, version info, or run normally.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut run_preview = false;
        let mut run_sample = false;
        let mut sample_hour: Option<f64> = None;
        let mut unknown_arg_found = false;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--preview" | "-p" => run_preview = true,
                "--sample" | "-s" => {
                    run_sample = true;
                    // Parse: --sample <hour>
                    if i + 1 < args_vec.len() {
                        match args_vec[i + 1].parse::<f64>() {
                            Ok(hour) if hour.is_finite() => sample_hour = Some(hour),
                            _ => {
                                Log::log_warning(&format!(
                                    "Invalid hour value: {}",
                                    args_vec[i + 1]
                                ));
                                unknown_arg_found = true;
                            }
                        }

                        i += 1; // Skip the parsed argument
                    } else {
                        Log::log_warning("Missing argument for --sample. Usage: --sample <hour>");
                        unknown_arg_found = true;
                    }
                }
                _ => {
                    // Check if the argument starts with a dash, indicating it's an option
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        unknown_arg_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
            i += 1;
        }

        // Determine the action based on parsed flags
        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help || unknown_arg_found {
            if unknown_arg_found {
                CliAction::ShowHelpDueToError
            } else {
                CliAction::ShowHelp
            }
        } else if run_preview {
            CliAction::Preview { debug_enabled }
        } else if run_sample {
            match sample_hour {
                Some(hour) => CliAction::Sample {
                    debug_enabled,
                    hour,
                },
                None => {
                    Log::log_warning("Missing hour value for --sample");
                    CliAction::ShowHelpDueToError
                }
            }
        } else {
            CliAction::Run { debug_enabled }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: daycurve [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-d, --debug           Enable detailed debug output");
    Log::log_indented("-h, --help            Print help information");
    Log::log_indented("-p, --preview         Print today's solar events and schedule, then exit");
    Log::log_indented("-s, --sample <hour>   Print the schedule value at a decimal hour, then exit");
    Log::log_indented("-V, --version         Print version information");
    Log::log_end();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = vec!["daycurve"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false
            }
        );
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = vec!["daycurve", "--debug"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: true
            }
        );
    }

    #[test]
    fn test_parse_debug_short_flag() {
        let args = vec!["daycurve", "-d"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: true
            }
        );
    }

    #[test]
    fn test_parse_help_flag() {
        let args = vec!["daycurve", "--help"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version_flags() {
        for flag in ["--version", "-V", "-v"] {
            let args = vec!["daycurve", flag];
            let parsed = ParsedArgs::parse(args);
            assert_eq!(parsed.action, CliAction::ShowVersion);
        }
    }

    #[test]
    fn test_parse_multiple_flags() {
        let args = vec!["daycurve", "--debug", "--help"];
        let parsed = ParsedArgs::parse(args);
        // Help takes precedence
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let args = vec!["daycurve", "--unknown"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_mixed_valid_and_invalid() {
        let args = vec!["daycurve", "--debug", "--invalid"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_version_takes_precedence() {
        let args = vec!["daycurve", "--version", "--help", "--debug"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_preview_flag() {
        let args = vec!["daycurve", "--preview"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Preview {
                debug_enabled: false
            }
        );
    }

    #[test]
    fn test_preview_with_debug_any_order() {
        for args in [
            vec!["daycurve", "--preview", "--debug"],
            vec!["daycurve", "--debug", "-p"],
        ] {
            let parsed = ParsedArgs::parse(args);
            assert_eq!(
                parsed.action,
                CliAction::Preview {
                    debug_enabled: true
                }
            );
        }
    }

    #[test]
    fn test_parse_sample_with_hour() {
        let args = vec!["daycurve", "--sample", "13.5"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Sample {
                debug_enabled: false,
                hour: 13.5
            }
        );
    }

    #[test]
    fn test_parse_sample_short_flag() {
        let args = vec!["daycurve", "-s", "0"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Sample {
                debug_enabled: false,
                hour: 0.0
            }
        );
    }

    #[test]
    fn test_parse_sample_missing_hour() {
        let args = vec!["daycurve", "--sample"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_sample_invalid_hour() {
        let args = vec!["daycurve", "--sample", "noon"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_sample_hour_not_treated_as_flag() {
        // A negative hour must be consumed as the sample value, not as
        // an unknown option
        let args = vec!["daycurve", "-s", "-1.5", "-d"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Sample {
                debug_enabled: true,
                hour: -1.5
            }
        );
    }
}

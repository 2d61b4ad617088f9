//! litractl - control Logitech Litra lights from the command line.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use litra::Litra;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::LightCommands;

#[derive(Parser, Debug)]
#[command(name = "litractl")]
#[command(about = "Control Logitech Litra Glow, Beam and Beam LX lights over USB")]
#[command(version)]
#[command(long_about = "
litractl turns Logitech Litra lights on and off and sets their brightness
and color temperature.

Without --serial-number every command acts on all connected lights.
Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only act on the light with this serial number
    #[arg(short, long, global = true, env = "LITRA_SERIAL_NUMBER")]
    serial_number: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Light(LightCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("litractl={log_level},litra={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Light(cmd) => {
            let litra = Litra::new()?;
            commands::execute(cmd, &litra, cli.serial_number.as_deref(), cli.json)
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{BrightnessArgs, TemperatureArgs};
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_devices_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["litractl", "devices"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Commands::Light(LightCommands::Devices)
        ));
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["litractl", "on", "--json", "-s", "ABC", "-vv"])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.serial_number.as_deref(), Some("ABC"));
        assert!(matches!(cli.command, Commands::Light(LightCommands::On)));
        Ok(())
    }

    #[test]
    fn parse_brightness_by_percentage() -> TestResult {
        let cli = Cli::try_parse_from(["litractl", "brightness-down", "--percentage", "10"])?;
        match cli.command {
            Commands::Light(LightCommands::BrightnessDown(args)) => {
                assert_eq!(
                    args,
                    BrightnessArgs {
                        value: None,
                        percentage: Some(10)
                    }
                );
            }
            _ => return Err("expected brightness-down".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_temperature_up() -> TestResult {
        let cli = Cli::try_parse_from(["litractl", "temperature-up", "--value", "200"])?;
        match cli.command {
            Commands::Light(LightCommands::TemperatureUp(TemperatureArgs { value })) => {
                assert_eq!(value, 200);
            }
            _ => return Err("expected temperature-up".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_completion_bash() -> TestResult {
        let cli = Cli::try_parse_from(["litractl", "completion", "bash"])?;
        assert!(matches!(cli.command, Commands::Completion { .. }));
        Ok(())
    }

    #[test]
    fn reject_brightness_without_value() {
        assert!(Cli::try_parse_from(["litractl", "brightness"]).is_err());
    }

    #[test]
    fn reject_brightness_with_both_flags() {
        let result = Cli::try_parse_from([
            "litractl",
            "brightness",
            "--value",
            "100",
            "--percentage",
            "50",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_percentage_over_100() {
        let result = Cli::try_parse_from(["litractl", "brightness", "--percentage", "150"]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_temperature_without_value() {
        assert!(Cli::try_parse_from(["litractl", "temperature"]).is_err());
    }

    #[test]
    fn reject_unknown_subcommand() {
        assert!(Cli::try_parse_from(["litractl", "dim"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

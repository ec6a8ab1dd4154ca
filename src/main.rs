#![warn(missing_docs)]

//! Command line control of the display backlight

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use log::info;
use randr_backlight::{BacklightController, BacklightError, FractionalBacklight, X11Backlight};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// X11 display to connect to, defaults to $DISPLAY
    #[clap(short, long)]
    display: Option<String>,

    /// Log more, can be repeated
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current backlight value
    Get,
    /// Set the backlight to a raw value within the valid range
    Set { value: i32 },
    /// Print the lowest and the highest valid value
    Range,
    /// Print the backlight as a percentage, or set it when a percentage is given
    Percent { percent: Option<f64> },
}

fn log_level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Execute a command, returning the text which should be printed
fn run<B: BacklightController>(backlight: &B, command: Command) -> Result<Option<String>> {
    match command {
        Command::Get => {
            let value = backlight.get().context("Couldn't read backlight")?;
            Ok(Some(value.to_string()))
        }
        Command::Set { value } => {
            let range = backlight.range().ok_or(BacklightError::RangeUnavailable)?;
            if !range.contains(value) {
                bail!(
                    "Backlight value {} is outside of the valid range {}..={}",
                    value,
                    range.min,
                    range.max
                );
            }
            backlight.set(value).context("Couldn't set backlight")?;
            info!("Backlight set to {}", value);
            Ok(None)
        }
        Command::Range => {
            let range = backlight.range().ok_or(BacklightError::RangeUnavailable)?;
            Ok(Some(format!("{} {}", range.min, range.max)))
        }
        Command::Percent { percent: None } => {
            let fraction = FractionalBacklight::new(backlight)
                .get_fraction()
                .context("Couldn't read backlight")?;
            Ok(Some(format!("{:.0}", fraction * 100.0)))
        }
        Command::Percent {
            percent: Some(percent),
        } => {
            FractionalBacklight::new(backlight)
                .set_fraction(percent / 100.0)
                .context("Couldn't set backlight")?;
            info!("Backlight set to {}%", percent);
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(log_level(args.verbose))?.start()?;
    log_panics::init();

    let backlight = X11Backlight::connect(args.display.as_deref())
        .context("Couldn't set up backlight control")?;
    if let Some(output) = run(&backlight, args.command)? {
        println!("{}", output);
    }
    backlight.close()?;
    Ok(())
}

/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::timer::{FocusTimer, Locale, Snapshot};

#[derive(Parser, Debug)]
#[command(
    name = "focustimer",
    version,
    about = "focustimer - A terminal-based focus countdown timer"
)]
pub struct Cli {
    /// Path to config.toml (defaults to the per-user config dir)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
    /// Display language
    #[arg(short = 'l', long = "locale", global = true, value_enum)]
    pub locale: Option<Locale>,
    /// Prefill the end time, e.g. 18:30
    #[arg(short = 'u', long = "until")]
    pub until: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print when a session ending at HH:MM would end and how long it would last
    Plan { until: String },
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
    }
}

/// Execute a CLI command.
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Plan { until } => {
            let line = plan_line(&until, SystemClock, config.locale)?;
            println!("{line}");
        }
    }
    Ok(())
}

fn plan_line<C: Clock>(until: &str, clock: C, locale: Locale) -> Result<String> {
    let mut timer = FocusTimer::with_clock(clock, locale);
    if !timer.set_end_time_text(until) {
        bail!("'{until}' is not a clock time (expected HH:MM)");
    }
    let snapshot = timer.snapshot();
    info!(until, end = ?snapshot.end_time_display, "planned session");
    Ok(describe_plan(&snapshot, locale))
}

fn describe_plan(snapshot: &Snapshot, locale: Locale) -> String {
    let labels = locale.labels();
    let end = snapshot.end_time_display.as_deref().unwrap_or("--:--");
    match &snapshot.focus_duration_display {
        Some(duration) => format!(
            "{} {}  {} {}  {}",
            labels.start_time,
            snapshot.start_time_display,
            labels.end_time,
            end,
            locale.focus_for(duration)
        ),
        None => format!("{} {}  {}", labels.end_time, end, labels.pick_end_time),
    }
}

mod app;
mod cli;
mod clock;
mod config;
mod event;
mod logging;
mod timer;
mod tui;
mod ui;

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let mut config = config::Config::load(cli_opts.config.as_deref())?;
    cli_opts.apply_overrides(&mut config);

    if let Some(command) = cli_opts.command {
        logging::init(&config, logging::LogTarget::Stderr)?;
        return cli::run(command, &config);
    }
    logging::init(&config, logging::LogTarget::File)?;

    let mut app = app::App::new(&config);
    if let Some(until) = cli_opts.until.as_deref() {
        if !app.timer.set_end_time_text(until) {
            bail!("'{until}' is not a clock time (expected HH:MM)");
        }
    }
    let mut terminal = tui::init()?;
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let result = event::run(&mut app, &mut terminal, poll_interval);

    tui::restore()?;

    result
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};
use crate::clock::Clock;

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
    }
    Ok(Some(AppEvent::Tick))
}

/// Waits no longer than the UI poll interval or the timer's next due tick.
fn next_timeout<C: Clock>(app: &App<C>, poll_interval: Duration) -> Duration {
    app.timer
        .time_until_next_tick()
        .and_then(|delta| delta.to_std().ok())
        .map_or(poll_interval, |due| due.min(poll_interval))
}

/// Runs the main event loop.
pub fn run<C: Clock>(app: &mut App<C>, terminal: &mut crate::tui::Terminal, poll_interval: Duration) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(next_timeout(app, poll_interval))? {
            app.update(event);
        }
        // A key press can land exactly on a due tick.
        app.update(AppEvent::Tick);
    }
    Ok(())
}

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::Theme;
use crate::app::App;
use crate::clock::Clock;
use crate::timer::{Snapshot, TimeField};

/// Start time (read-only) beside the editable end time.
pub fn build_selector_lines<C: Clock>(app: &App<C>, snapshot: &Snapshot) -> Vec<Line<'static>> {
    let labels = app.timer.locale().labels();
    let editable = !snapshot.is_running() && !snapshot.is_completed();

    let field_style = |field: TimeField| {
        if !editable {
            Style::default().fg(Theme::dim())
        } else if field == app.focused_field {
            let color = if snapshot.input_valid {
                Theme::valid()
            } else {
                Theme::highlight()
            };
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::primary())
        }
    };

    vec![
        Line::from(vec![
            Span::styled(format!("  {:<14}", labels.start_time), Style::default().fg(Theme::dim())),
            Span::styled(labels.end_time, Style::default().fg(Theme::dim())),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {:<14}", snapshot.start_time_display),
                Style::default()
                    .fg(Theme::text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                placeholder(&snapshot.hours_text),
                field_style(TimeField::Hours),
            ),
            Span::styled(":", Style::default().fg(Theme::text())),
            Span::styled(
                placeholder(&snapshot.minutes_text),
                field_style(TimeField::Minutes),
            ),
        ]),
    ]
}

fn placeholder(text: &str) -> String {
    match text.len() {
        0 => "--".to_string(),
        1 => format!("{text}_"),
        _ => text.to_string(),
    }
}

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::headline())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("End time"));
    lines.extend(section_lines(&[
        "0-9: Type hours/minutes (a full field starts over)",
        "Backspace: Delete last digit",
        "Left/Right, Tab: Switch between hours and minutes",
        "Enter: Hours -> minutes, then start",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Session"));
    lines.extend(section_lines(&[
        "s: Start",
        "r: Reset (asks for confirmation)",
        "t: Show/hide time settings while running",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Dialogs"));
    lines.extend(section_lines(&["y/Enter: Confirm", "n/Esc: Cancel"]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "?: Toggle help",
        "q: Quit (asks first while a session is running)",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::primary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}

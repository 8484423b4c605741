mod dial;
mod help;
mod helpers;
mod selector;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView};
use crate::clock::Clock;
use crate::timer::{Labels, Locale, RunState, Snapshot};
use helpers::{centered_rect, hint_line};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let snapshot = app.timer.snapshot();
    let locale = app.timer.locale();
    let labels = locale.labels();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(header(), layout[0]);

    let body_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()));
    let body_area = body_block.inner(layout[1]);
    frame.render_widget(body_block, layout[1]);

    if app.view == AppView::Help {
        let help = Paragraph::new(help::build_help_text()).style(Style::default().fg(Theme::text()));
        frame.render_widget(help, body_area);
    } else {
        let mut top_lines = headline_lines(&snapshot, locale, app.selector_visible);
        top_lines.push(Line::from(""));
        if !snapshot.is_running() || app.selector_visible {
            top_lines.extend(selector::build_selector_lines(app, &snapshot));
            top_lines.push(Line::from(""));
        }
        let top_height = u16::try_from(top_lines.len()).unwrap_or(u16::MAX);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(top_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(body_area);

        frame.render_widget(Paragraph::new(Text::from(top_lines)), sections[0]);
        dial::render_dial(frame, sections[1], &snapshot, labels);

        let mut bottom_lines = info_lines(&snapshot, locale);
        bottom_lines.push(Line::from(""));
        bottom_lines.push(button_line(&snapshot, labels));
        bottom_lines.push(Line::from(""));
        bottom_lines.push(Line::from(Span::styled(
            "  ----------------------------------------",
            Style::default().fg(Theme::dim()),
        )));
        bottom_lines.push(keybinds_line(&snapshot));
        frame.render_widget(Paragraph::new(Text::from(bottom_lines)), sections[2]);
    }

    let footer = Paragraph::new(Text::from(footer_line(app, &snapshot)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if snapshot.is_reset_pending {
        render_confirm_popup(frame, labels.reset_prompt, labels);
    } else if app.quit_prompt {
        render_confirm_popup(frame, labels.quit_prompt, labels);
    }
}

fn header() -> Paragraph<'static> {
    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Focus  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "focus timer",
            Style::default()
                .fg(Theme::headline())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        )
}

fn headline_lines(snapshot: &Snapshot, locale: Locale, selector_visible: bool) -> Vec<Line<'static>> {
    let labels = locale.labels();
    let headline_style = Style::default()
        .fg(Theme::headline())
        .add_modifier(Modifier::BOLD);

    let duration = snapshot.focus_duration_display.as_deref();
    let end = snapshot.end_time_display.as_deref();
    match (snapshot.run_state, end, duration) {
        (RunState::Completed, _, _) => vec![Line::from(Span::styled(
            format!("  {}", labels.completed),
            Style::default()
                .fg(Theme::success())
                .add_modifier(Modifier::BOLD),
        ))],
        (RunState::Running, Some(end), Some(duration)) => {
            let [first, second] = locale.focusing_until(end, duration);
            let toggle = if selector_visible {
                labels.hide_selector
            } else {
                labels.show_selector
            };
            vec![
                Line::from(Span::styled(format!("  {first}"), headline_style)),
                Line::from(Span::styled(format!("  {second}"), headline_style)),
                Line::from(vec![
                    Span::styled("  t ", Style::default().fg(Theme::primary())),
                    Span::styled(toggle, Style::default().fg(Theme::dim())),
                ]),
            ]
        }
        (_, Some(_), Some(duration)) => vec![Line::from(Span::styled(
            format!("  {}", locale.focus_for(duration)),
            headline_style,
        ))],
        _ => vec![Line::from(Span::styled(
            format!("  {}", labels.pick_end_time),
            headline_style,
        ))],
    }
}

fn info_lines(snapshot: &Snapshot, locale: Locale) -> Vec<Line<'static>> {
    if !snapshot.is_running() && !snapshot.is_completed() {
        return Vec::new();
    }
    let labels = locale.labels();
    vec![
        Line::from(vec![
            Span::styled(format!("  {}: ", labels.elapsed), Style::default().fg(Theme::dim())),
            Span::styled(
                locale.format_minutes(snapshot.elapsed_minutes),
                Style::default().fg(Theme::text()),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}: ", labels.remaining), Style::default().fg(Theme::dim())),
            Span::styled(
                locale.format_minutes(snapshot.remaining_minutes),
                Style::default().fg(Theme::text()),
            ),
        ]),
    ]
}

fn button_line(snapshot: &Snapshot, labels: &Labels) -> Line<'static> {
    let (label, style) = match snapshot.run_state {
        RunState::Idle if snapshot.is_start_enabled => (
            labels.start,
            Style::default()
                .fg(Color::Black)
                .bg(Theme::action())
                .add_modifier(Modifier::BOLD),
        ),
        RunState::Idle => (labels.start, Style::default().fg(Theme::dim()).bg(Theme::secondary())),
        RunState::Running | RunState::Completed => (
            labels.reset,
            Style::default()
                .fg(Color::Black)
                .bg(Theme::danger())
                .add_modifier(Modifier::BOLD),
        ),
    };
    Line::from(vec![Span::raw("  "), Span::styled(format!("   {label}   "), style)])
}

fn keybinds_line(snapshot: &Snapshot) -> Line<'static> {
    match snapshot.run_state {
        RunState::Idle => hint_line(&[
            ("0-9", "Time"),
            ("Tab", "Field"),
            ("s", "Start"),
            ("?", "Help"),
            ("q", "Quit"),
        ]),
        RunState::Running => hint_line(&[("t", "Settings"), ("r", "Reset"), ("?", "Help"), ("q", "Quit")]),
        RunState::Completed => hint_line(&[("r", "Reset"), ("?", "Help"), ("q", "Quit")]),
    }
}

fn footer_line<C: Clock>(app: &App<C>, snapshot: &Snapshot) -> Line<'static> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Theme::danger()),
        ));
    }

    match snapshot.run_state {
        RunState::Running => {
            // Animated indicator that cycles every second
            let animation_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let anim_index = (app.timer.now().timestamp() % animation_chars.len() as i64) as usize;
            let indicator = animation_chars[anim_index];
            let locale = app.timer.locale();
            Line::from(vec![
                Span::styled(
                    format!(" {indicator} "),
                    Style::default()
                        .fg(Theme::primary())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "{} -> {}  ",
                        snapshot.start_time_display,
                        snapshot.end_time_display.as_deref().unwrap_or("--:--")
                    ),
                    Style::default().fg(Theme::text()),
                ),
                Span::styled(
                    format!(
                        "{} {}",
                        locale.labels().remaining,
                        locale.format_minutes(snapshot.remaining_minutes)
                    ),
                    Style::default().fg(Theme::headline()),
                ),
            ])
        }
        RunState::Completed => Line::from(Span::styled(
            format!(" ● {}", app.timer.locale().labels().done),
            Style::default().fg(Theme::success()),
        )),
        RunState::Idle => Line::from(Span::styled(
            format!(" ○ {}", app.timer.locale().labels().waiting),
            Style::default().fg(Theme::dim()),
        )),
    }
}

fn render_confirm_popup(frame: &mut Frame, message: &'static str, labels: &Labels) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Theme::headline())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" y {} ", labels.yes),
                Style::default()
                    .fg(Color::Black)
                    .bg(Theme::primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" n {} ", labels.no),
                Style::default()
                    .fg(Theme::primary())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::primary())),
        );
    frame.render_widget(popup_widget, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::AppEvent;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::timer::FocusTimer;

    fn render(app: &App<ManualClock>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn english_app() -> (App<ManualClock>, ManualClock) {
        let clock = ManualClock::at_hms(10, 0, 0);
        let timer = FocusTimer::with_clock(clock.clone(), Locale::En);
        (App::with_timer(timer, &Config::default()), clock)
    }

    fn press(app: &mut App<ManualClock>, keys: &str) {
        for ch in keys.chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_idle_screen_asks_for_end_time() {
        let (app, _clock) = english_app();
        let screen = render(&app);
        assert!(screen.contains("Pick an end time"));
        assert!(screen.contains("Waiting"));
        assert!(screen.contains("10:00"));
    }

    #[test]
    fn test_selected_time_shows_duration() {
        let (mut app, _clock) = english_app();
        press(&mut app, "1130");
        let screen = render(&app);
        assert!(screen.contains("Focus for 1h 30m"));
        assert!(screen.contains("11:30"));
    }

    #[test]
    fn test_running_screen_shows_progress() {
        let (mut app, clock) = english_app();
        press(&mut app, "1040s");
        clock.advance_secs(10 * 60);
        app.update(AppEvent::Tick);
        let screen = render(&app);
        assert!(screen.contains("Until 10:40"));
        assert!(screen.contains("25%"));
        assert!(screen.contains("Elapsed: 10m"));
        assert!(screen.contains("Remaining: 30m"));
    }

    #[test]
    fn test_reset_prompt_is_drawn() {
        let (mut app, _clock) = english_app();
        press(&mut app, "1040sr");
        let screen = render(&app);
        assert!(screen.contains("Reset the timer?"));
    }

    #[test]
    fn test_completed_screen() {
        let (mut app, clock) = english_app();
        press(&mut app, "1002s");
        clock.advance_secs(3 * 60);
        app.update(AppEvent::Tick);
        let screen = render(&app);
        assert!(screen.contains("Focus complete!"));
        assert!(screen.contains("Done!"));
    }
}

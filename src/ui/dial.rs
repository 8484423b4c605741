use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Gauge},
};

use super::theme::Theme;
use crate::timer::{Labels, Snapshot};

/// Progress indicator: percentage while running, a done label once completed.
pub fn render_dial(frame: &mut Frame, area: Rect, snapshot: &Snapshot, labels: &Labels) {
    let (percent, label, color) = if snapshot.is_completed() {
        (100, labels.done.to_string(), Theme::success())
    } else if snapshot.is_running() {
        (
            u16::from(snapshot.progress_percent.min(100)),
            format!("{}%", snapshot.progress_percent),
            Theme::primary(),
        )
    } else {
        (0, labels.waiting.to_string(), Theme::dim())
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        )
        .gauge_style(Style::default().fg(color).bg(Theme::secondary()))
        .percent(percent)
        .label(Span::styled(
            label,
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

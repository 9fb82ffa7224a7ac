//! Layout components (form/preview split, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, REMOVE_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form and an optional preview column
pub fn create_layout(area: Rect, show_preview: bool) -> (Rect, Option<Rect>) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    if !show_preview {
        return (rows[0], None);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Preview
        ])
        .split(rows[0]);

    (cols[0], Some(cols[1]))
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.state.form.mode().label()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(key_hints(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(
            format!("sink: {}", app.sink_name()),
            Style::default().fg(Color::Blue),
        ),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

fn key_hints() -> String {
    format!(
        "Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:submit  {REMOVE_SHORTCUT}:remove hobby  {COPY_SHORTCUT}:copy  F2:mode  F3:preview  Esc:quit"
    )
}

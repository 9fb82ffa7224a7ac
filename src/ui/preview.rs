//! Live JSON preview of the form buffer

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the preview column; the last accepted submission goes underneath
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (live_area, last_area) = match &app.state.last_submission {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (area, None),
    };

    let json = app
        .state
        .form
        .preview_json()
        .unwrap_or_else(|err| format!("<unable to render: {err}>"));
    draw_json(frame, live_area, " Live Preview ", json, Color::Yellow);

    if let (Some(area), Some(data)) = (last_area, &app.state.last_submission) {
        let json = serde_json::to_string_pretty(data)
            .unwrap_or_else(|err| format!("<unable to render: {err}>"));
        draw_json(frame, area, " Last Submission ", json, Color::Green);
    }
}

fn draw_json(frame: &mut Frame, area: Rect, title: &str, json: String, color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(json)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

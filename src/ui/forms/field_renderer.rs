//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field box is drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub is_active: bool,
    /// Inline validation message shown on the bottom border
    pub error: Option<String>,
}

impl<'a> FieldView<'a> {
    pub fn new(label: &'a str, is_active: bool, error: Option<String>) -> Self {
        Self {
            label,
            is_active,
            error,
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else if self.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(message) = &self.error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        block
    }
}

/// Draw a text input with cursor, placeholder and inline error
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    view: FieldView,
    value: &str,
    placeholder: &str,
    is_multiline: bool,
) {
    let cursor = Span::styled(
        if view.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );
    let text_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if is_multiline {
        // split keeps a trailing empty line so the cursor follows a newline
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, text_style), cursor]))
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(view.block()), area);
}

/// Draw a set of mutually exclusive options as a radio row
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    view: FieldView,
    options: &[&str],
    selected: usize,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let (marker, style) = if idx == selected {
            (
                "(•) ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            ("( ) ", Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(format!("{marker}{option}"), style));
        spans.push(Span::raw("   "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(view.block()), area);
}

/// Draw a checkbox with its text inside a bordered box
pub fn draw_toggle_field(frame: &mut Frame, area: Rect, view: FieldView, text: &str, checked: bool) {
    let marker = if checked { "[x] " } else { "[ ] " };
    let style = if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let line = Line::from(vec![
        Span::styled(marker, style.add_modifier(Modifier::BOLD)),
        Span::styled(text, style),
    ]);

    frame.render_widget(Paragraph::new(line).block(view.block()), area);
}

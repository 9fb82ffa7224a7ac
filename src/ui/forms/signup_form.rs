//! Signup form rendering

use super::field_renderer::{draw_choice_field, draw_text_field, draw_toggle_field, FieldView};
use crate::app::App;
use crate::platform::REMOVE_SHORTCUT;
use crate::schema::SubscriptionType;
use crate::state::forms::{FieldKey, FormController, HobbyEntry};
use crate::state::FocusTarget;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const PREMIUM_HEIGHT: u16 = 5;
const REMOVE_BUTTON_WIDTH: u16 = 8;

/// One vertical slot of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Name,
    Email,
    Subscription,
    Premium,
    HobbiesHeader,
    Hobby(usize),
    AddHobby,
    Newsletter,
    Submit,
}

impl Row {
    fn height(self) -> u16 {
        match self {
            Row::Premium => PREMIUM_HEIGHT,
            Row::HobbiesHeader => 1,
            Row::AddHobby | Row::Submit => BUTTON_HEIGHT,
            Row::Name | Row::Email | Row::Subscription | Row::Hobby(_) | Row::Newsletter => {
                FIELD_HEIGHT
            }
        }
    }
}

/// Rows in render order for the current form state
fn form_rows(form: &FormController) -> Vec<Row> {
    let mut rows = vec![Row::Name, Row::Email, Row::Subscription];
    if form.is_premium() {
        rows.push(Row::Premium);
    }
    rows.push(Row::HobbiesHeader);
    rows.extend((0..form.hobbies().len()).map(Row::Hobby));
    rows.extend([Row::AddHobby, Row::Newsletter, Row::Submit]);
    rows
}

fn row_of_focus(form: &FormController, focus: FocusTarget) -> Option<Row> {
    match focus {
        FocusTarget::Field(FieldKey::Name) => Some(Row::Name),
        FocusTarget::Field(FieldKey::Email) => Some(Row::Email),
        FocusTarget::Field(FieldKey::SubscriptionType) => Some(Row::Subscription),
        FocusTarget::Field(FieldKey::PremiumFeatures) => Some(Row::Premium),
        FocusTarget::Field(FieldKey::Hobby(id)) => form.hobbies().index_of(id).map(Row::Hobby),
        FocusTarget::Field(FieldKey::Newsletter) => Some(Row::Newsletter),
        FocusTarget::AddHobby => Some(Row::AddHobby),
        FocusTarget::Submit => Some(Row::Submit),
    }
}

/// First visible line so that the focused row sits inside the viewport
///
/// Positions are `usize` since the hobby list is unbounded.
fn scroll_offset(heights: &[u16], focused: Option<usize>, viewport: u16) -> usize {
    let viewport = usize::from(viewport);
    let Some(focused) = focused else {
        return 0;
    };
    let top: usize = heights[..focused].iter().map(|h| usize::from(*h)).sum();
    let bottom = top + usize::from(heights[focused]);
    bottom.saturating_sub(viewport).min(top)
}

/// Draw the signup form, scrolled so the focused control is visible
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let rows = form_rows(form);
    let heights: Vec<u16> = rows.iter().map(|row| row.height()).collect();
    let total: usize = heights.iter().map(|h| usize::from(*h)).sum();

    let mut block = Block::default()
        .title(" Signup ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let viewport = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    let focused = row_of_focus(form, app.state.focus)
        .and_then(|row| rows.iter().position(|r| *r == row));
    let offset = scroll_offset(&heights, focused, viewport.height);

    let more = Style::default().fg(Color::Yellow);
    if offset > 0 {
        block = block.title_top(Line::styled(" ↑ more ", more).right_aligned());
    }
    if offset + usize::from(viewport.height) < total {
        block = block.title_bottom(Line::styled(" ↓ more ", more).right_aligned());
    }
    frame.render_widget(block, area);

    let mut top = 0usize;
    for (row, height) in rows.iter().zip(&heights) {
        let row_top = top;
        top += usize::from(*height);
        if row_top < offset {
            continue;
        }
        let y = row_top - offset;
        if y + usize::from(*height) > usize::from(viewport.height) {
            break;
        }
        // Bounded by the viewport height, so the conversion cannot fail
        let Ok(y) = u16::try_from(y) else {
            break;
        };
        let slot = Rect {
            x: viewport.x,
            y: viewport.y + y,
            width: viewport.width,
            height: *height,
        };
        draw_row(frame, slot, *row, app);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: Row, app: &App) {
    let form = &app.state.form;
    let focus = app.state.focus;
    let is_focused = |key: FieldKey| focus == FocusTarget::Field(key);
    let error_of = |key: FieldKey| form.error(key).map(|issue| issue.message());

    match row {
        Row::Name => draw_text_field(
            frame,
            area,
            FieldView::new("Name", is_focused(FieldKey::Name), error_of(FieldKey::Name)),
            &text_of(form, FieldKey::Name),
            "",
            false,
        ),
        Row::Email => draw_text_field(
            frame,
            area,
            FieldView::new("Email", is_focused(FieldKey::Email), error_of(FieldKey::Email)),
            &text_of(form, FieldKey::Email),
            "",
            false,
        ),
        Row::Subscription => {
            let options = [SubscriptionType::Free, SubscriptionType::Premium];
            let selected = options
                .iter()
                .position(|o| *o == form.watch_subscription())
                .unwrap_or(0);
            draw_choice_field(
                frame,
                area,
                FieldView::new(
                    FieldKey::SubscriptionType.label(),
                    is_focused(FieldKey::SubscriptionType),
                    error_of(FieldKey::SubscriptionType),
                ),
                &options.map(|o| o.label()),
                selected,
            );
        }
        Row::Premium => draw_text_field(
            frame,
            area,
            FieldView::new(
                FieldKey::PremiumFeatures.label(),
                is_focused(FieldKey::PremiumFeatures),
                error_of(FieldKey::PremiumFeatures),
            ),
            &text_of(form, FieldKey::PremiumFeatures),
            "Describe the premium features you're interested in...",
            true,
        ),
        Row::HobbiesHeader => {
            let header = Paragraph::new(format!(
                "Hobbies (Optional): {}",
                form.hobbies().len()
            ))
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
            frame.render_widget(header, area);
        }
        Row::Hobby(index) => {
            if let Some(entry) = form.hobbies().iter().nth(index) {
                draw_hobby(frame, area, index, entry, app);
            }
        }
        Row::AddHobby => render_button(
            frame,
            area,
            "Add Hobby",
            focus == FocusTarget::AddHobby,
            Color::Blue,
        ),
        Row::Newsletter => draw_toggle_field(
            frame,
            area,
            FieldView::new("Newsletter", is_focused(FieldKey::Newsletter), None),
            FieldKey::Newsletter.label(),
            form.value(FieldKey::Newsletter)
                .and_then(|v| v.as_flag())
                .unwrap_or(false),
        ),
        Row::Submit => render_button(
            frame,
            area,
            "Submit",
            focus == FocusTarget::Submit,
            Color::Green,
        ),
    }
}

/// One hobby input plus its remove button
fn draw_hobby(frame: &mut Frame, area: Rect, index: usize, entry: &HobbyEntry, app: &App) {
    let key = FieldKey::Hobby(entry.id);
    let is_active = app.state.focus == FocusTarget::Field(key);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(REMOVE_BUTTON_WIDTH),
        ])
        .split(area);

    let label = format!("Hobby #{}", index + 1);
    draw_text_field(
        frame,
        cols[0],
        FieldView::new(
            &label,
            is_active,
            app.state.form.error(key).map(|i| i.message()),
        ),
        &entry.hobby,
        "",
        false,
    );
    render_button(frame, cols[1], REMOVE_SHORTCUT, is_active, Color::Red);
}

fn text_of(form: &FormController, key: FieldKey) -> String {
    form.value(key)
        .map(|v| v.as_text().to_string())
        .unwrap_or_default()
}

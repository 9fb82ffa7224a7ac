//! Application state: the form, focus, and transient messages

use super::focus::{focus_order, FocusTarget};
use super::forms::{FieldKey, FieldValue, FormController, ValidationMode};
use crate::schema::FormData;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: FormController,
    pub focus: FocusTarget,

    // UI state
    pub show_preview: bool,
    pub status_message: Option<String>,
    pub last_submission: Option<FormData>,

    // Modal error queue (sink and clipboard failures)
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(mode: ValidationMode, show_preview: bool) -> Self {
        Self {
            form: FormController::new(mode),
            show_preview,
            ..Default::default()
        }
    }

    /// Push an error message for display in the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "Error queued");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Position of the focused control in render order
    pub fn focus_index(&self) -> usize {
        focus_order(&self.form)
            .iter()
            .position(|t| *t == self.focus)
            .unwrap_or(0)
    }

    /// Move to next focus target (wraps around)
    pub fn next_focus(&mut self) {
        let order = focus_order(&self.form);
        let next = (self.focus_index() + 1) % order.len();
        self.move_focus(order[next]);
    }

    /// Move to previous focus target (wraps around)
    pub fn prev_focus(&mut self) {
        let order = focus_order(&self.form);
        let current = self.focus_index();
        let prev = if current == 0 {
            order.len() - 1
        } else {
            current - 1
        };
        self.move_focus(order[prev]);
    }

    /// Focus `target`, blurring the field that had focus
    pub fn move_focus(&mut self, target: FocusTarget) {
        if target == self.focus {
            return;
        }
        if let Some(key) = self.focus.field() {
            self.form.field_blurred(key);
        }
        self.focus = target;
    }

    /// Handle character input on the focused control
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FocusTarget::Field(key) if key.is_text() => {
                if let Err(err) = self.form.push_char(key, c) {
                    tracing::debug!(%err, "Ignored input");
                }
            }
            FocusTarget::Field(_) if c == ' ' => self.toggle_focused(),
            _ => {}
        }
    }

    /// Handle backspace on the focused control
    pub fn backspace(&mut self) {
        if let Some(key) = self.focus.field().filter(FieldKey::is_text) {
            if let Err(err) = self.form.pop_char(key) {
                tracing::debug!(%err, "Ignored backspace");
            }
        }
    }

    /// Newline in the multi-line premium input
    pub fn newline(&mut self) {
        if let Some(key) = self.focus.field().filter(FieldKey::is_multiline) {
            if let Err(err) = self.form.push_char(key, '\n') {
                tracing::debug!(%err, "Ignored newline");
            }
        }
    }

    /// Flip the focused subscription selector or newsletter toggle
    pub fn toggle_focused(&mut self) {
        let Some(key) = self.focus.field() else {
            return;
        };
        let value = match self.form.value(key) {
            Some(FieldValue::Choice(choice)) => FieldValue::Choice(choice.toggle()),
            Some(FieldValue::Flag(flag)) => FieldValue::Flag(!flag),
            _ => return,
        };
        if let Err(err) = self.form.set_value(key, value) {
            tracing::debug!(%err, "Ignored toggle");
        }
    }

    /// Append a hobby row and focus it
    pub fn add_hobby(&mut self) {
        let id = self.form.append_hobby();
        self.move_focus(FocusTarget::Field(FieldKey::Hobby(id)));
    }

    /// Remove the focused hobby row, keeping focus in the list
    pub fn remove_focused_hobby(&mut self) {
        let Some(FieldKey::Hobby(id)) = self.focus.field() else {
            return;
        };
        let Some(index) = self.form.hobbies().index_of(id) else {
            return;
        };
        if let Err(err) = self.form.remove_hobby(index) {
            self.push_error(err.to_string());
            return;
        }

        let hobbies = self.form.hobbies();
        let neighbour = hobbies
            .id_at(index)
            .or_else(|| index.checked_sub(1).and_then(|i| hobbies.id_at(i)));
        self.focus = match neighbour {
            Some(id) => FocusTarget::Field(FieldKey::Hobby(id)),
            None => FocusTarget::AddHobby,
        };
    }

    /// Reset focus to the first field if the focused control disappeared
    pub fn ensure_focus_visible(&mut self) {
        if !focus_order(&self.form).contains(&self.focus) {
            self.focus = FocusTarget::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldIssue, SubscriptionType};

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut state = AppState::default();
        state.prev_focus();
        assert_eq!(state.focus, FocusTarget::Submit);
        state.next_focus();
        assert_eq!(state.focus, FocusTarget::default());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = AppState::default();
        for c in "Ada".chars() {
            state.input_char(c);
        }
        state.next_focus();
        state.input_char('x');
        state.backspace();
        state.input_char('a');
        let values = state.form.values();
        assert_eq!(values.name, "Ada");
        assert_eq!(values.email, "a");
    }

    #[test]
    fn test_space_toggles_selector_and_reveals_premium() {
        let mut state = AppState::default();
        state.move_focus(FocusTarget::Field(FieldKey::SubscriptionType));
        state.input_char(' ');
        assert_eq!(state.form.watch_subscription(), SubscriptionType::Premium);

        state.next_focus();
        assert_eq!(state.focus, FocusTarget::Field(FieldKey::PremiumFeatures));
        state.input_char('a');
        state.newline();
        state.input_char('b');
        assert_eq!(state.form.values().premium_features.as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_newsletter_toggle() {
        let mut state = AppState::default();
        state.move_focus(FocusTarget::Field(FieldKey::Newsletter));
        state.toggle_focused();
        assert_eq!(state.form.values().newsletter, Some(true));
        state.toggle_focused();
        assert_eq!(state.form.values().newsletter, Some(false));
    }

    #[test]
    fn test_add_and_remove_hobby_moves_focus() {
        let mut state = AppState::default();
        state.add_hobby();
        state.input_char('a');
        state.add_hobby();
        state.input_char('b');
        let first = state.form.hobbies().id_at(0).unwrap();

        state.remove_focused_hobby();
        assert_eq!(state.form.hobbies().len(), 1);
        assert_eq!(state.focus, FocusTarget::Field(FieldKey::Hobby(first)));

        state.remove_focused_hobby();
        assert!(state.form.hobbies().is_empty());
        assert_eq!(state.focus, FocusTarget::AddHobby);
    }

    #[test]
    fn test_blur_validates_in_blur_mode() {
        let mut state = AppState::new(ValidationMode::OnBlur, true);
        state.next_focus();
        assert_eq!(
            state.form.error(FieldKey::Name),
            Some(FieldIssue::NameRequired)
        );
    }

    #[test]
    fn test_ensure_focus_visible_after_switching_to_free() {
        let mut state = AppState::default();
        state.move_focus(FocusTarget::Field(FieldKey::SubscriptionType));
        state.toggle_focused();
        state.focus = FocusTarget::Field(FieldKey::PremiumFeatures);
        state
            .form
            .set_value(
                FieldKey::SubscriptionType,
                FieldValue::Choice(SubscriptionType::Free),
            )
            .unwrap();
        state.ensure_focus_visible();
        assert_eq!(state.focus, FocusTarget::default());
    }
}

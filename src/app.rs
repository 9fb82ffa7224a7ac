//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::{JsonlSink, LogSink, SubmitSink};
use crate::state::forms::{FieldKey, SubmitOutcome};
use crate::state::{AppState, FocusTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Where config changes are persisted (none in tests)
    config_path: Option<PathBuf>,
    /// Receives accepted submissions
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App, choosing the submit sink from the config
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> Self {
        let sink: Box<dyn SubmitSink> = match &config.submissions_path {
            Some(path) => Box::new(JsonlSink::new(path.clone())),
            None => Box::new(LogSink),
        };
        let mut app = Self::with_sink(config, sink);
        app.config_path = config_path;
        app
    }

    /// Create an App with an explicit sink and no config persistence
    pub fn with_sink(config: TuiConfig, sink: Box<dyn SubmitSink>) -> Self {
        tracing::info!(
            sink = sink.name(),
            mode = config.validation_mode().label(),
            "Form ready"
        );
        Self {
            state: AppState::new(config.validation_mode(), config.show_preview()),
            config,
            config_path: None,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focus = self.state.focus;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('y')
                if ctrl || key.modifiers.contains(crate::platform::COPY_MODIFIER) =>
            {
                self.copy_preview()
            }
            KeyCode::Char('d') if ctrl => self.state.remove_focused_hobby(),
            KeyCode::Delete if matches!(focus.field(), Some(FieldKey::Hobby(_))) => {
                self.state.remove_focused_hobby()
            }
            KeyCode::F(2) => self.cycle_validation_mode(),
            KeyCode::F(3) => self.state.show_preview = !self.state.show_preview,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Left | KeyCode::Right
                if focus == FocusTarget::Field(FieldKey::SubscriptionType) =>
            {
                self.state.toggle_focused()
            }
            KeyCode::Enter => match focus {
                FocusTarget::Submit => self.submit().await,
                FocusTarget::AddHobby => self.state.add_hobby(),
                FocusTarget::Field(FieldKey::PremiumFeatures) => self.state.newline(),
                FocusTarget::Field(FieldKey::SubscriptionType | FieldKey::Newsletter) => {
                    self.state.toggle_focused()
                }
                FocusTarget::Field(_) => self.state.next_focus(),
            },
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }

        self.state.ensure_focus_visible();
        Ok(())
    }

    /// Validate and submit the form
    async fn submit(&mut self) {
        match self.state.form.submit(self.sink.as_ref()).await {
            Ok(SubmitOutcome::Submitted(data)) => {
                self.state.status_message = Some(format!("Submitted via {}", self.sink.name()));
                self.state.last_submission = Some(data);
                self.state.focus = FocusTarget::default();
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                self.state.status_message =
                    Some(format!("{} field(s) need attention", errors.len()));
                let first = errors
                    .iter()
                    .next()
                    .and_then(|e| self.state.form.register_field(e.path).ok());
                if let Some(key) = first {
                    self.state.focus = FocusTarget::Field(key);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Submit sink failed");
                self.push_error(format!("Submit failed: {err:#}"));
            }
        }
    }

    /// Switch to the next validation mode and remember it
    fn cycle_validation_mode(&mut self) {
        let mode = self.state.form.mode().next();
        self.state.form.set_mode(mode);
        self.config.validation_mode = Some(mode);
        self.state.status_message = Some(format!("Validate {}", mode.label()));

        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                self.push_error(format!("Failed to save config: {err:#}"));
            }
        }
    }

    /// Copy the live JSON preview to the clipboard
    pub fn copy_preview(&mut self) {
        let result = self
            .state
            .form
            .preview_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));
        match result {
            Ok(()) => self.state.status_message = Some("Preview copied".to_string()),
            Err(err) => self.push_error(format!("Failed to copy: {err:#}")),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

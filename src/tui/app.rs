// TUI application state
//
// Owns the form widgets, focus, the rendered preview, and the two timers
// the composer has: the preview debounce deadline and the toast expiry.
// Rendering reads this state; key dispatch in the event loop mutates it.

use super::components::toast::Toast;
use super::fields::{FieldId, KeyOutcome, TextInput};
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::message::{build_message, CommitType, FormState, EMPTY_PLACEHOLDER};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    /// Selected commit type; None renders the select as empty
    pub commit_type: Option<CommitType>,
    pub scope: TextInput,
    pub subject: TextInput,
    pub body: TextInput,
    pub footer: TextInput,
    pub breaking: bool,
    pub breaking_detail: TextInput,

    /// Which form row receives input
    pub focused: FieldId,

    /// Text currently shown in the preview pane
    pub preview: String,

    /// Deadline for the pending preview rebuild; replaced on every edit
    pending_preview: Option<Instant>,
    preview_debounce: Duration,

    /// Transient notification ("Copied!")
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Captured log entries for the status line
    pub log_buffer: LogBuffer,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_kind = config.theme;
        let mut app = Self {
            commit_type: None,
            scope: TextInput::single_line(),
            subject: TextInput::single_line(),
            body: TextInput::multi_line(),
            footer: TextInput::multi_line(),
            breaking: false,
            breaking_detail: TextInput::single_line(),
            focused: FieldId::default(),
            preview: String::new(),
            pending_preview: None,
            preview_debounce: Duration::from_millis(config.preview_debounce_ms),
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            should_quit: false,
            input_handler: InputHandler::default(),
            log_buffer,
        };
        app.render_preview_now();
        app
    }

    // ── Form reading ────────────────────────────────────────────────────

    /// Snapshot the form: trimmed text fields plus the two non-text inputs
    pub fn form_state(&self) -> FormState {
        FormState {
            commit_type: self.commit_type,
            scope: self.scope.trimmed().to_string(),
            subject: self.subject.trimmed().to_string(),
            body: self.body.trimmed().to_string(),
            footer: self.footer.trimmed().to_string(),
            breaking: self.breaking,
            breaking_detail: self.breaking_detail.trimmed().to_string(),
        }
    }

    /// The breaking-detail row only exists while the flag is set
    pub fn detail_visible(&self) -> bool {
        self.breaking
    }

    // ── Preview scheduling ──────────────────────────────────────────────

    /// Queue a preview rebuild, replacing any pending deadline
    pub fn schedule_preview(&mut self) {
        self.pending_preview = Some(Instant::now() + self.preview_debounce);
    }

    /// Rebuild the preview if the debounce deadline has passed
    pub fn flush_due_preview(&mut self) {
        if let Some(deadline) = self.pending_preview {
            if Instant::now() >= deadline {
                self.render_preview_now();
            }
        }
    }

    /// Rebuild the preview immediately, cancelling any pending deadline
    pub fn render_preview_now(&mut self) {
        self.preview = build_message(&self.form_state());
        self.pending_preview = None;
    }

    /// Whether the preview currently shows the all-empty placeholder
    pub fn preview_is_placeholder(&self) -> bool {
        self.preview == EMPTY_PLACEHOLDER
    }

    /// Text to copy, or None when only the placeholder is showing
    pub fn copy_payload(&self) -> Option<&str> {
        if self.preview_is_placeholder() {
            None
        } else {
            Some(&self.preview)
        }
    }

    // ── Field mutation ──────────────────────────────────────────────────

    /// Route a key to the focused field; select and checkbox rows are
    /// handled by the event loop, so only text rows live here
    pub fn handle_field_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let outcome = match self.focused {
            FieldId::Scope => self.scope.handle_key(key),
            FieldId::Subject => self.subject.handle_key(key),
            FieldId::Body => self.body.handle_key(key),
            FieldId::Footer => self.footer.handle_key(key),
            FieldId::BreakingDetail => self.breaking_detail.handle_key(key),
            FieldId::Type | FieldId::Breaking => KeyOutcome::Ignored,
        };
        if outcome == KeyOutcome::Edited {
            self.schedule_preview();
        }
        outcome
    }

    /// Cycle the type select forward
    pub fn cycle_type_next(&mut self) {
        self.commit_type = CommitType::cycle_next(self.commit_type);
        self.schedule_preview();
    }

    /// Cycle the type select backward
    pub fn cycle_type_prev(&mut self) {
        self.commit_type = CommitType::cycle_prev(self.commit_type);
        self.schedule_preview();
    }

    /// Flip the breaking-change flag, pulling focus off the detail row
    /// when it disappears
    pub fn toggle_breaking(&mut self) {
        self.breaking = !self.breaking;
        if !self.breaking && self.focused == FieldId::BreakingDetail {
            self.focused = FieldId::Breaking;
        }
        self.schedule_preview();
    }

    /// Return every field to its default and re-render synchronously
    ///
    /// The immediate rebuild also cancels any pending debounce, so the
    /// cleared state is visible without delay.
    pub fn reset(&mut self) {
        self.commit_type = None;
        self.scope.clear();
        self.subject.clear();
        self.body.clear();
        self.footer.clear();
        self.breaking = false;
        self.breaking_detail.clear();
        if self.focused == FieldId::BreakingDetail {
            self.focused = FieldId::Breaking;
        }
        self.render_preview_now();
    }

    // ── Focus ───────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.detail_visible());
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev(self.detail_visible());
    }

    // ── Theme ───────────────────────────────────────────────────────────

    /// Flip the theme and restyle; persistence happens at the caller so
    /// state changes stay free of filesystem effects
    pub fn toggle_theme(&mut self) -> ThemeKind {
        self.theme_kind = self.theme_kind.toggle();
        self.theme = self.theme_kind.theme();
        self.theme_kind
    }

    // ── Toast ───────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once its display window has passed
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ── Input handler delegation ────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::with_config(LogBuffer::new(), &Config::default())
    }

    /// App whose debounce never fires on its own within a test
    fn app_slow() -> App {
        let config = Config {
            preview_debounce_ms: 60_000,
            ..Config::default()
        };
        App::with_config(LogBuffer::new(), &config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_field_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_on_placeholder() {
        let app = app();
        assert!(app.preview_is_placeholder());
        assert!(app.copy_payload().is_none());
    }

    #[test]
    fn edits_wait_for_the_debounce_deadline() {
        let mut app = app_slow();
        app.focused = FieldId::Subject;
        type_str(&mut app, "add button");
        // Deadline far in the future: flushing now must not rebuild
        app.flush_due_preview();
        assert!(app.preview_is_placeholder());

        app.render_preview_now();
        assert_eq!(app.preview, ": add button");
    }

    #[test]
    fn zero_debounce_rebuilds_on_flush() {
        let config = Config {
            preview_debounce_ms: 0,
            ..Config::default()
        };
        let mut app = App::with_config(LogBuffer::new(), &config);
        app.focused = FieldId::Subject;
        type_str(&mut app, "fix typo");
        app.flush_due_preview();
        assert_eq!(app.preview, ": fix typo");
    }

    #[test]
    fn reset_clears_fields_and_skips_debounce() {
        let mut app = app_slow();
        app.commit_type = Some(CommitType::Feat);
        app.focused = FieldId::Subject;
        type_str(&mut app, "add button");
        app.toggle_breaking();
        app.render_preview_now();
        assert!(!app.preview_is_placeholder());

        app.focused = FieldId::Scope;
        type_str(&mut app, "ui");
        app.reset();
        // Immediate: no flush call, no waiting
        assert!(app.preview_is_placeholder());
        assert_eq!(app.form_state(), FormState::default());
    }

    #[test]
    fn copy_payload_present_once_form_has_content() {
        let mut app = app();
        app.commit_type = Some(CommitType::Fix);
        app.render_preview_now();
        assert_eq!(app.copy_payload(), Some("fix: "));
    }

    #[test]
    fn toggling_breaking_twice_restores_focus_ring() {
        let mut app = app();
        app.toggle_breaking();
        app.focused = FieldId::BreakingDetail;
        app.toggle_breaking();
        // Detail row vanished; focus may not dangle on it
        assert_eq!(app.focused, FieldId::Breaking);
    }

    #[test]
    fn theme_toggle_twice_is_identity() {
        let mut app = app();
        let start = app.theme_kind;
        app.toggle_theme();
        assert_ne!(app.theme_kind, start);
        app.toggle_theme();
        assert_eq!(app.theme_kind, start);
    }

    #[test]
    fn form_state_reads_trimmed_values() {
        let mut app = app();
        app.focused = FieldId::Scope;
        type_str(&mut app, "  ui  ");
        assert_eq!(app.form_state().scope, "ui");
    }

    #[test]
    fn expired_toast_is_cleared() {
        let mut app = app();
        app.toast = Some(Toast::with_duration("done", Duration::ZERO));
        app.clear_expired_toast();
        assert!(app.toast.is_none());
    }
}

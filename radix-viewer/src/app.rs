//! Application state and event handling
//!
//! The App owns the Converter (the synchronized model from radix-core),
//! the focus state, and the transient toast queue. Key events mutate the
//! focused field's text and hand the new raw string to the engine; the
//! other four rows re-render from the engine's state on the next draw, so
//! there is no write path that could loop back into the edit handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use radix_core::convert::{Converter, SourceField};
use std::time::{Duration, Instant};

/// How long a toast stays visible
pub const TOAST_TTL: Duration = Duration::from_millis(2600);

/// Visual class of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// One transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Toast {
            message: message.into(),
            kind,
            created: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) > TOAST_TTL
    }
}

/// The main application
pub struct App {
    /// The synchronized five-field model
    pub converter: Converter,

    /// Which field row has keyboard focus
    pub focus: SourceField,

    /// Pending toast notifications, oldest first
    pub toasts: Vec<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            converter: Converter::new(),
            focus: SourceField::Text,
            toasts: Vec::new(),
            should_quit: false,
        }
    }

    /// Move focus to the next field row, wrapping at the bottom
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % SourceField::COUNT;
        self.focus = SourceField::ALL[next];
    }

    /// Move focus to the previous field row, wrapping at the top
    pub fn focus_prev(&mut self) {
        let prev = (self.focus.index() + SourceField::COUNT - 1) % SourceField::COUNT;
        self.focus = SourceField::ALL[prev];
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('k') if ctrl => {
                self.clear_all();
                true
            }
            KeyCode::Char('p') if ctrl => {
                self.load_sample();
                true
            }
            KeyCode::Char('y') if ctrl => {
                self.copy_all();
                true
            }
            KeyCode::Char('f') if ctrl => {
                self.copy_focused();
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                true
            }
            KeyCode::Backspace => self.edit_backspace(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_push(c);
                true
            }
            _ => false,
        }
    }

    /// Append a character to the focused field and run the transition
    fn edit_push(&mut self, c: char) {
        let mut text = self.converter.field_text(self.focus).to_string();
        text.push(c);
        self.converter.apply_edit(self.focus, &text);
    }

    /// Delete the last character of the focused field and run the transition
    fn edit_backspace(&mut self) -> bool {
        let mut text = self.converter.field_text(self.focus).to_string();
        if text.pop().is_none() {
            return false;
        }
        self.converter.apply_edit(self.focus, &text);
        true
    }

    pub fn clear_all(&mut self) {
        self.converter.clear_all();
        self.toast("Converter cleared", ToastKind::Info);
    }

    pub fn load_sample(&mut self) {
        self.converter.load_sample();
        self.toast("Loaded sample input", ToastKind::Success);
    }

    /// Copy all five fields to the clipboard as a labeled block
    pub fn copy_all(&mut self) {
        let snapshot = self.converter.snapshot();
        if snapshot.is_empty() {
            self.toast("Nothing to copy", ToastKind::Error);
            return;
        }
        match copy_to_clipboard(snapshot.clipboard_payload()) {
            Ok(()) => self.toast("Copied all fields", ToastKind::Success),
            Err(_) => self.toast("Copy failed", ToastKind::Error),
        }
    }

    /// Copy only the focused field's trimmed text
    pub fn copy_focused(&mut self) {
        let value = self.converter.field_text(self.focus).trim().to_string();
        if value.is_empty() {
            self.toast("Nothing to copy", ToastKind::Error);
            return;
        }
        match copy_to_clipboard(value) {
            Ok(()) => self.toast(format!("{} copied", self.focus.label()), ToastKind::Success),
            Err(_) => self.toast("Copy failed", ToastKind::Error),
        }
    }

    /// Drop expired toasts. Returns whether any were removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.expired(now));
        self.toasts.len() != before
    }

    fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast::new(message, kind));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_to_clipboard(payload: String) -> Result<(), arboard::Error> {
    arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_core::convert::Severity;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_updates_other_fields() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('H')));
        app.handle_key(key(KeyCode::Char('i')));

        assert_eq!(app.converter.field_text(SourceField::Text), "Hi");
        assert_eq!(app.converter.field_text(SourceField::Decimal), "72 105");
        assert_eq!(app.converter.field_text(SourceField::Hex), "48 69");
    }

    #[test]
    fn test_backspace_reruns_transition() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('H')));
        app.handle_key(key(KeyCode::Char('i')));
        assert!(app.handle_key(key(KeyCode::Backspace)));

        assert_eq!(app.converter.field_text(SourceField::Decimal), "72");
        // Backspace on an empty field is a no-op
        app.handle_key(key(KeyCode::Backspace));
        assert!(!app.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut app = App::new();
        assert_eq!(app.focus, SourceField::Text);

        for expected in [
            SourceField::Decimal,
            SourceField::Binary,
            SourceField::Hex,
            SourceField::Octal,
            SourceField::Text,
        ] {
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, expected);
        }

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, SourceField::Octal);
    }

    #[test]
    fn test_editing_the_focused_numeric_field() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Tab)); // focus decimal
        for c in "72".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(app.converter.field_text(SourceField::Text), "H");
        assert_eq!(app.converter.field_text(SourceField::Decimal), "72");
    }

    #[test]
    fn test_invalid_input_marks_only_the_focused_field() {
        let mut app = App::new();
        app.load_sample();
        app.toasts.clear();

        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.focus, SourceField::Hex);
        // The hex field already holds "48 65 6C 6C 6F"; append a bad digit
        app.handle_key(key(KeyCode::Char('G')));

        assert!(app.converter.is_invalid(SourceField::Hex));
        assert_eq!(app.converter.status().severity, Severity::Error);
        assert_eq!(app.converter.field_text(SourceField::Text), "Hello");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_clear_key_resets_and_toasts() {
        let mut app = App::new();
        app.load_sample();
        app.handle_key(ctrl('k'));

        assert_eq!(app.converter.field_text(SourceField::Text), "");
        assert_eq!(app.converter.status().message, "Ready");
        let toast = app.toasts.last().unwrap();
        assert_eq!(toast.message, "Converter cleared");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_sample_key_loads_hello() {
        let mut app = App::new();
        app.handle_key(ctrl('p'));
        assert_eq!(app.converter.field_text(SourceField::Text), "Hello");
        assert_eq!(app.toasts.last().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut app = App::new();
        app.load_sample();
        assert_eq!(app.toasts.len(), 1);

        assert!(!app.tick(Instant::now()));
        assert_eq!(app.toasts.len(), 1);

        let later = Instant::now() + TOAST_TTL + Duration::from_millis(10);
        assert!(app.tick(later));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_control_characters_do_not_edit() {
        let mut app = App::new();
        app.handle_key(ctrl('x'));
        assert_eq!(app.converter.field_text(SourceField::Text), "");
    }
}

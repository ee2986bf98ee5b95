//! Theme configuration for the radixv UI
//!
//! Two layers: `PresentationStyles` holds the concrete `Style` values,
//! grouped by semantic role, and `Theme` exposes methods named after UI
//! element locations. UI code only ever calls the location methods, so
//! elements that should look alike stay in sync when colors are tweaked.

use radix_core::convert::Severity;
use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastKind;

/// Concrete style values, grouped by semantic role
#[derive(Debug, Clone)]
pub struct PresentationStyles {
    /// The field row that currently has focus
    pub active: Style,

    /// Unfocused field rows and regular content
    pub normal: Style,

    /// Field rows holding input that failed validation
    pub invalid: Style,

    /// Successful status and toast messages
    pub success: Style,

    /// Non-ASCII warning status
    pub warning: Style,

    /// Error status and toast messages
    pub error: Style,

    /// Neutral informational text (counters, info toasts)
    pub muted: Style,

    /// Title/header bar
    pub title: Style,
}

/// Location-named styling interface for the viewer
#[derive(Debug, Clone)]
pub struct Theme {
    presentation: PresentationStyles,
}

impl Theme {
    /// Border and title of the focused field row
    pub fn field_focused(&self) -> Style {
        self.presentation.active
    }

    /// Border and title of unfocused field rows
    pub fn field_normal(&self) -> Style {
        self.presentation.normal
    }

    /// Border and title of a field row marked invalid
    pub fn field_invalid(&self) -> Style {
        self.presentation.invalid
    }

    /// Status line text for a given severity
    pub fn status(&self, severity: Severity) -> Style {
        match severity {
            Severity::Neutral => self.presentation.muted,
            Severity::Success => self.presentation.success,
            Severity::Warning => self.presentation.warning,
            Severity::Error => self.presentation.error,
        }
    }

    /// Byte/char counters next to the status line
    pub fn counters(&self) -> Style {
        self.presentation.muted
    }

    /// Toast text for a given toast kind
    pub fn toast(&self, kind: ToastKind) -> Style {
        match kind {
            ToastKind::Info => self.presentation.muted,
            ToastKind::Success => self.presentation.success,
            ToastKind::Error => self.presentation.error,
        }
    }

    /// The title bar across the top
    pub fn title_bar(&self) -> Style {
        self.presentation.title
    }

    /// The key-binding help line at the bottom
    pub fn help_bar(&self) -> Style {
        self.presentation.muted
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            presentation: PresentationStyles {
                active: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                normal: Style::default(),
                invalid: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                success: Style::default().fg(Color::Green),
                warning: Style::default().fg(Color::Yellow),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                title: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styles_are_distinct() {
        let theme = Theme::default();
        assert_ne!(
            theme.status(Severity::Success),
            theme.status(Severity::Error)
        );
        assert_ne!(
            theme.status(Severity::Warning),
            theme.status(Severity::Neutral)
        );
    }

    #[test]
    fn test_error_states_share_styling() {
        let theme = Theme::default();
        // An invalid field and an error status point at the same problem
        assert_eq!(theme.field_invalid(), theme.status(Severity::Error));
        assert_eq!(theme.toast(ToastKind::Error), theme.status(Severity::Error));
    }
}

//! UI rendering logic
//!
//! Layout structure, top to bottom:
//! - Title bar (1 line, fixed)
//! - Five field rows (3 lines each, bordered)
//! - Status line (message + byte/char counters)
//! - Help line (key bindings)
//!
//! Toasts overlay the top-right corner, newest at the bottom.

use crate::app::App;
use crate::theme::Theme;
use radix_core::convert::SourceField;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 44;
/// Minimum terminal height required for the UI
const MIN_TERMINAL_HEIGHT: u16 = 18;
/// Height of one bordered field row
const FIELD_ROW_HEIGHT: u16 = 3;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
        render_error_too_small(frame, size, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                     // Title bar
            Constraint::Length(FIELD_ROW_HEIGHT * 5),  // Field rows
            Constraint::Length(1),                     // Status line
            Constraint::Length(1),                     // Help line
            Constraint::Min(0),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], theme);
    render_field_rows(frame, chunks[1], app, theme);
    render_status_line(frame, chunks[2], app, theme);
    render_help_line(frame, chunks[3], theme);
    render_toasts(frame, size, app, theme);
}

fn render_error_too_small(frame: &mut Frame, area: Rect, theme: &Theme) {
    let msg = format!(
        "Terminal too small: {}x{} < {}x{}",
        area.width, area.height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
    );
    let paragraph = Paragraph::new(msg).style(theme.field_invalid());
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let paragraph = Paragraph::new("radixv :: base converter").style(theme.title_bar());
    frame.render_widget(paragraph, area);
}

fn render_field_rows(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_ROW_HEIGHT); 5])
        .split(area);

    for (row, &field) in rows.iter().zip(SourceField::ALL.iter()) {
        render_field_row(frame, *row, app, theme, field);
    }
}

fn render_field_row(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, field: SourceField) {
    let focused = app.focus == field;
    let invalid = app.converter.is_invalid(field);

    let style = if invalid {
        theme.field_invalid()
    } else if focused {
        theme.field_focused()
    } else {
        theme.field_normal()
    };

    let mut title = field.label().to_string();
    if invalid {
        title.push_str(" [INVALID]");
    }
    if focused {
        title.push_str(" [FOCUSED]");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(title, style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = app.converter.field_text(field);
    frame.render_widget(Paragraph::new(text), inner);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let status = app.converter.status();
    let line = Line::from(vec![
        Span::styled(status.message.clone(), theme.status(status.severity)),
        Span::raw("  "),
        Span::styled(
            format!("{} bytes · {} chars", status.byte_count, status.char_count),
            theme.counters(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_line(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = "Tab/↑↓ field · Ctrl+K clear · Ctrl+P sample · Ctrl+Y copy all · Ctrl+F copy field · Esc quit";
    frame.render_widget(Paragraph::new(help).style(theme.help_bar()), area);
}

fn render_toasts(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    for (offset, toast) in app.toasts.iter().enumerate() {
        let width = (toast.message.chars().count() as u16 + 2).min(area.width);
        let y = 1 + offset as u16;
        if y >= area.height {
            break;
        }
        let rect = Rect {
            x: area.width.saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };
        frame.render_widget(Clear, rect);
        let paragraph =
            Paragraph::new(format!(" {} ", toast.message)).style(theme.toast(toast.kind));
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_content(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| render(frame, app, &theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_all_field_labels() {
        let mut app = App::new();
        app.load_sample();
        let rendered = rendered_content(&app, 80, 24);

        for field in SourceField::ALL {
            assert!(rendered.contains(field.label()), "missing {}", field.label());
        }
        assert!(rendered.contains("Hello"));
        assert!(rendered.contains("72 101 108 108 111"));
        assert!(rendered.contains("5 bytes"));
    }

    #[test]
    fn test_render_invalid_marker() {
        let mut app = App::new();
        app.converter.apply_edit(SourceField::Hex, "12G");
        let rendered = rendered_content(&app, 80, 24);

        assert!(rendered.contains("[INVALID]"));
        assert!(rendered.contains("Invalid hexadecimal value"));
    }

    #[test]
    fn test_render_too_small_terminal() {
        let app = App::new();
        let rendered = rendered_content(&app, 30, 5);
        assert!(rendered.contains("Terminal too small"));
    }
}

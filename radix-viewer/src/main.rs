//! Standalone binary for the radix interactive converter.
//! Usage:
//!   radixv [value] [--from <field>]
//!
//! With no arguments the converter starts with the built-in sample loaded,
//! mirroring the clear/sample commands available inside the UI.

mod app;
mod theme;
mod ui;

use app::App;
use clap::{Arg, Command};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use radix_core::convert::SourceField;
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use theme::Theme;

fn main() {
    let matches = Command::new("radixv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal base converter")
        .arg(Arg::new("value").help("Initial value to convert").index(1))
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Representation of the initial value: text, decimal, binary, hex, octal")
                .default_value("text"),
        )
        .get_matches();

    let field: SourceField = matches
        .get_one::<String>("from")
        .unwrap()
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        });

    let mut app = App::new();
    match matches.get_one::<String>("value") {
        Some(value) => {
            app.converter.apply_edit(field, value);
            app.focus = field;
        }
        None => {
            app.converter.load_sample();
        }
    }

    if let Err(err) = run(app) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let theme = Theme::default();

    loop {
        terminal.draw(|frame| ui::render(frame, app, &theme))?;

        // Poll for events with timeout so toasts expire without input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

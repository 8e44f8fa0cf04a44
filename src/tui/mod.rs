use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

pub mod actions;
pub mod app;
pub mod row;
pub mod style;
pub mod table;

use app::{App, Flow};

/// Takes over the terminal and runs the event loop until the operator quits.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    // Install panic hook so terminal is restored even on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let result = match Terminal::new(backend).context("Failed to create terminal") {
        Ok(mut terminal) => {
            let looped = event_loop(&mut terminal, app);
            let _ = terminal.show_cursor();
            looped
        }
        Err(e) => Err(e),
    };

    restore_terminal();
    let _ = std::panic::take_hook();

    result
}

/// Reads one event at a time; every event is handled and redrawn before the
/// next one is read.
pub fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            _ => {} //Resizes and other events only trigger a redraw
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

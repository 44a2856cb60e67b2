//! Terminal lifecycle and the event loop.
//!
//! Everything here is plumbing: raw mode on, alternate screen in, poll for
//! keys, hand them to the application, restore the terminal on the way out.
//! No editor logic lives at this layer.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use crate::app::{App, Transition};
use crate::input::map_key;
use crate::store::WasteStore;
use crate::ui;

pub fn run<S: WasteStore>(app: &mut App<S>) -> Result<()> {
    // terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    loop {
        terminal.draw(|f| {
            let size = f.size();
            ui::draw(f, size, app);
        })?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    if let Some(input) = map_key(app.mode, k) {
                        if app.handle(input) == Transition::Quit {
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    // restore
    disable_raw_mode()?;
    let out = terminal.backend_mut();
    execute!(out, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

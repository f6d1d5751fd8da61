//! Console event loop.
//!
//! Reads one terminal event at a time, feeds it to the [`ConsoleView`], and
//! redraws. The loop ends once the view reaches its terminated state.

pub mod keybindings;
pub mod lifecycle;

use std::error::Error;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use crate::core::app::App;
use crate::core::config::Config;
use crate::ui::renderer::ui;
use crate::ui::view::ConsoleView;
use crate::utils::color::detect_color_depth;

use self::lifecycle::{restore_terminal, setup_terminal, ConsoleTerminal};

pub fn run_console(app: App, config: &Config) -> Result<(), Box<dyn Error>> {
    let depth = detect_color_depth();
    debug!(?depth, "detected color depth");
    let mut view = ConsoleView::new(app, config, depth);

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut view);
    // Restore even when the loop failed; report the loop error first.
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;

    info!(chapters = view.app().document.len(), "console closed");
    Ok(())
}

fn event_loop(
    terminal: &mut ConsoleTerminal,
    view: &mut ConsoleView,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(f, view))?;
        if view.is_terminated() {
            return Ok(());
        }
        handle_event(view, event::read()?);
    }
}

/// Applies one terminal event to the view.
pub fn handle_event(view: &mut ConsoleView, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => view.handle_key(key),
        Event::Paste(text) => view.paste(&text),
        // Resizes only need the redraw that follows every event.
        _ => {}
    }
}

//! Terminal setup and the event loop for the interactive UI.

use anyhow::Context;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::{message_for_key, App};
use crate::ui;

/// Run the UI until the user quits. The terminal is restored on every exit
/// path, including errors.
pub fn run(mut app: App) -> anyhow::Result<()> {
    info!(session = %app.session.id(), "starting interactive session");

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    info!(session = %app.session.id(), "session ended");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .context("drawing frame")?;

        if let Event::Key(key) = event::read().context("reading terminal event")? {
            if let Some(message) = message_for_key(key) {
                debug!(?message, "update");
                app.update(message);
            }
        }
    }
    Ok(())
}

//! Main loop: draw, poll, translate, update.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application until the model asks to quit.
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // Render the current state
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        // Block for at most 100ms so the UI stays responsive
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let message = event::handle_event(event, app);
            update::update(app, message);
        }
    }

    Ok(())
}

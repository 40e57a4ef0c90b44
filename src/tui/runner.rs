//! Main TUI runner - entry point and event loop

use crate::app::{controller, handler, state::AppState};
use crate::common::prelude::*;
use crate::i18n::Catalog;
use crate::runtime::RuntimeClient;

use super::{event, terminal, widgets};

/// Run the panel UI against a connected runtime.
///
/// Initialization happens before the terminal grabs the screen so a
/// failed fetch prints as a normal error.
pub async fn run(client: &RuntimeClient, catalog: &Catalog) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = controller::init(client, catalog).await?;

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, client);
    ratatui::restore();
    result
}

/// Main event loop: draw, poll, update, dispatch
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    client: &RuntimeClient,
) -> Result<()> {
    loop {
        terminal.draw(|frame| widgets::view(frame, state))?;

        if let Some(msg) = event::poll()? {
            let result = handler::update(state, msg);
            // Fire-and-forget: nothing awaits or inspects these sends
            for request in result.requests {
                client.send(request);
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

use std::{cell::Cell, rc::Rc};

use anyhow::Result;

use crate::{
    domain::events::AppEvent,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

const TUI_SHELL_STARTED: &str = "TUI_SHELL_STARTED";
const TUI_SHELL_STOPPED: &str = "TUI_SHELL_STOPPED";

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        code = TUI_SHELL_STARTED,
        log_level = %context.config.logging.level,
        user = %context.config.user.id,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    let result = drive(event_source, orchestrator, |orchestrator| {
        terminal.draw(|frame| {
            view::render(
                frame,
                orchestrator.state(),
                orchestrator.store().state(),
                orchestrator.current_user(),
            )
        })
    });

    tracing::info!(code = TUI_SHELL_STOPPED, ok = result.is_ok(), "TUI shell stopped");
    result
}

/// Runs the event loop until the orchestrator stops. A frame is drawn first,
/// after every key, and after any tick whose handling changed the store.
fn drive<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&dyn ShellOrchestrator) -> Result<()>,
{
    let store_changed = Rc::new(Cell::new(true));
    let subscription = {
        let store_changed = Rc::clone(&store_changed);
        orchestrator
            .store_mut()
            .subscribe(move || store_changed.set(true))
    };

    let mut result = Ok(());
    let mut needs_redraw = true;
    while orchestrator.state().is_running() {
        if store_changed.replace(false) || needs_redraw {
            if let Err(error) = draw(&*orchestrator) {
                result = Err(error);
                break;
            }
        }

        needs_redraw = false;
        match event_source.next_event() {
            Ok(Some(event)) => {
                needs_redraw = !matches!(event, AppEvent::Tick);
                if let Err(error) = orchestrator.handle_event(event) {
                    result = Err(error);
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    orchestrator.store_mut().unsubscribe(subscription);
    result
}

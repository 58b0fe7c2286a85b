use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ShellState},
    store::Store,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn store(&self) -> &Store;
    fn store_mut(&mut self) -> &mut Store;
    /// Identity used as sender and creator of new records.
    fn current_user(&self) -> &str;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

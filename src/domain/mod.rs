//! Domain layer: core entities and UI state.

pub mod chat;
pub mod events;
pub mod message;
pub mod shell_state;
pub mod text_input_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}

//! Infrastructure layer: config, logging, storage paths and id generation.

pub mod config;
pub mod contracts;
pub mod error;
pub mod ids;
pub mod logging;
pub mod storage_layout;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}

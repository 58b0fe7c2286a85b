use std::{path::Path, time::Instant};

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        ids::{now_rfc3339, RandomIdSource},
        storage_layout::StorageLayout,
    },
    store::{RootState, Store},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::{DefaultShellOrchestrator, ShellSettings},
    },
};

/// Everything the interactive loop needs, wired for a real terminal.
pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config, resolves on-disk locations and starts file logging. The
/// returned guard must outlive every log call.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path), StorageLayout::resolve()?)?;
    let guard = infra::logging::init(&context.config.logging, &context.layout)?;

    Ok((context, guard))
}

fn build_context(
    config_adapter: &dyn ConfigAdapter,
    layout: StorageLayout,
) -> Result<AppContext, AppError> {
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config, layout))
}

/// Builds the seeded store and the orchestrator for an interactive session,
/// with the chat list already mounted.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(compose_orchestrator(context, Instant::now())),
    }
}

fn compose_orchestrator(
    context: &AppContext,
    now: Instant,
) -> DefaultShellOrchestrator<RandomIdSource> {
    let store = Store::new(RootState::seeded(&now_rfc3339()));
    let mut orchestrator = DefaultShellOrchestrator::new(
        store,
        RandomIdSource,
        ShellSettings::from_config(&context.config),
    );
    orchestrator.mount_chat_list(now);
    orchestrator
}

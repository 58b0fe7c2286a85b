use anyhow::Result;

use crate::{
    api::{self, RestClient},
    cli::{Cli, Command, RemoteTarget},
    domain, infra, store, ui,
    usecases::{self, bootstrap, context::AppContext, remote},
};

const REMOTE_COMMAND_FAILED: &str = "REMOTE_COMMAND_FAILED";

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        store = store::module_name(),
        api = api::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Remote(target) => {
            let output = run_remote(&context, target)?;
            println!("{output}");
        }
    }

    Ok(())
}

fn run_remote(context: &AppContext, target: RemoteTarget) -> Result<String> {
    let command = target.into_command(&context.config.user.id);
    let client = RestClient::new(&context.config.api)?;

    remote::execute(&client, command.clone()).map_err(|error| {
        tracing::warn!(
            code = REMOTE_COMMAND_FAILED,
            command = ?command,
            error = %error,
            "remote command failed"
        );
        anyhow::Error::new(error)
    })
}

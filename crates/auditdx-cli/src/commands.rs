use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use auditdx_runtime::{Config, RunContext, find_project_root};

pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }

    let project_root = find_project_root(cli.project_root.as_deref())?;
    let ctx = RunContext {
        project_root,
        config,
    };

    match cli.command {
        Some(Commands::Run) => handlers::run::handle(&ctx, cli.format),
        Some(Commands::Quick) => handlers::quick::handle(&ctx, cli.format),
        None => handlers::menu::handle(ctx),
    }
}

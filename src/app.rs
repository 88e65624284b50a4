use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(profile, json, verbose)?;
    log::debug!("using profile `{}`", ctx.profile);

    match command {
        Command::List(args) => commands::list::run(&ctx, args).await,
        Command::Stats => commands::stats::run(&ctx).await,
        Command::Show(args) => commands::show::run(&ctx, args).await,
        Command::Me => commands::me::run(&ctx).await,
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}

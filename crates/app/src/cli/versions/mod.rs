use clap::{Args, Subcommand};
use prodsnap_app::context::AppContext;

mod list;
mod revert;

#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct VersionsCommand {
    #[command(subcommand)]
    command: Option<VersionsSubcommand>,

    #[command(flatten)]
    list: list::ListVersionsArgs,
}

#[derive(Debug, Subcommand)]
enum VersionsSubcommand {
    /// Revert a product to one of the listed versions
    Revert(revert::RevertVersionArgs),
}

pub(crate) async fn run(ctx: &AppContext, command: VersionsCommand) -> Result<(), String> {
    match command.command {
        Some(VersionsSubcommand::Revert(args)) => revert::run(ctx, args).await,
        None => list::run(ctx, command.list).await,
    }
}

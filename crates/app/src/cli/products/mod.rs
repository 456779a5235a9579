use clap::{Args, Subcommand};
use prodsnap_app::context::AppContext;

mod delete;
mod edit;
mod list;
mod new;
mod revert;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Search and sort the catalog
    List(list::ListProductsArgs),

    /// Product fields and version history
    Show(show::ShowProductArgs),

    /// Create a product with its first version
    New(new::NewProductArgs),

    /// Update a product, recording a new version
    Edit(edit::EditProductArgs),

    /// Delete a product
    Delete(delete::DeleteProductArgs),

    /// Revert a product to an earlier version
    Revert(revert::RevertProductArgs),
}

pub(crate) async fn run(ctx: &AppContext, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(ctx, args).await,
        ProductsSubcommand::Show(args) => show::run(ctx, args).await,
        ProductsSubcommand::New(args) => new::run(ctx, args).await,
        ProductsSubcommand::Edit(args) => edit::run(ctx, args).await,
        ProductsSubcommand::Delete(args) => delete::run(ctx, args).await,
        ProductsSubcommand::Revert(args) => revert::run(ctx, args).await,
    }
}

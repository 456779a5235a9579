use std::io;

use clap::{Args, Parser, Subcommand};
use prodsnap_app::{
    config::ClientConfig,
    context::AppContext,
    navigation::Route,
    notifications::Level,
    observability,
    pages::Outcome,
    render::{self, RenderError},
};

mod products;
mod versions;
mod views;

#[derive(Debug, Parser)]
#[command(name = "prodsnap", about = "ProdSnap product catalog admin", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Catalog counters and recently updated products
    Dashboard,

    /// Browse and manage products
    Products(products::ProductsCommand),

    /// Version history across every product
    Versions(versions::VersionsCommand),

    /// Version lineage across the catalog
    Analytics,

    /// Customer orders
    Orders,

    /// Application preferences
    Settings,

    /// Navigation links
    Nav,

    /// Render the view at a client route
    Open(OpenArgs),
}

#[derive(Debug, Args)]
struct OpenArgs {
    /// Route path, e.g. `/products/1`
    route: Route,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let ctx = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to start: {error}"))?;

        match self.command {
            Commands::Dashboard => views::show(&ctx, &Route::Dashboard).await,
            Commands::Products(command) => products::run(&ctx, command).await,
            Commands::Versions(command) => versions::run(&ctx, command).await,
            Commands::Analytics => views::show(&ctx, &Route::Analytics).await,
            Commands::Orders => views::show(&ctx, &Route::Orders).await,
            Commands::Settings => views::show(&ctx, &Route::Settings).await,
            Commands::Nav => views::nav(&ctx, &Route::Dashboard),
            Commands::Open(args) => views::show(&ctx, &args.route).await,
        }
    }
}

/// Show the outcome of a page action.
///
/// Error notifications become the command's error; navigation renders the
/// destination.
pub(crate) async fn finish(ctx: &AppContext, outcome: Outcome) -> Result<(), String> {
    if let Some(notification) = outcome.notification {
        if notification.level == Level::Error {
            return Err(notification.to_string());
        }

        render::write_notification(io::stdout().lock(), &notification).map_err(output_error)?;
    }

    if let Some(route) = outcome.navigate {
        views::show(ctx, &route).await?;
    }

    Ok(())
}

pub(crate) fn output_error(error: RenderError) -> String {
    format!("failed to write output: {error}")
}

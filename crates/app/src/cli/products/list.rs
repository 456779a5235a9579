use clap::Args;
use prodsnap::catalog::{CatalogQuery, CatalogSort};
use prodsnap_app::context::AppContext;

use crate::cli::views;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Case-insensitive match on name or description
    #[arg(long, short, default_value = "")]
    search: String,

    /// Sort order
    #[arg(long, default_value_t = CatalogSort::default())]
    sort: CatalogSort,
}

pub(crate) async fn run(ctx: &AppContext, args: ListProductsArgs) -> Result<(), String> {
    views::catalog(
        ctx,
        CatalogQuery {
            search: args.search,
            sort: args.sort,
        },
    )
    .await
}

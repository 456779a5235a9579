use clap::Args;
use prodsnap::products::ProductId;
use prodsnap_app::context::AppContext;

use crate::cli::views;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product id
    product_id: ProductId,
}

pub(crate) async fn run(ctx: &AppContext, args: ShowProductArgs) -> Result<(), String> {
    views::product(ctx, &args.product_id).await
}

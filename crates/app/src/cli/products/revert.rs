use std::io;

use clap::Args;
use prodsnap::products::{ProductId, VersionId};
use prodsnap_app::{
    context::AppContext,
    pages::{MountGuard, product_detail::ProductDetailPage},
    render::product::write_product,
};

use crate::cli::{finish, output_error};

#[derive(Debug, Args)]
pub(crate) struct RevertProductArgs {
    /// Product id
    product_id: ProductId,

    /// Id of the version to restore
    #[arg(long)]
    version: VersionId,
}

pub(crate) async fn run(ctx: &AppContext, args: RevertProductArgs) -> Result<(), String> {
    let mut page = ProductDetailPage::new(ctx.api.clone(), MountGuard::new(), args.product_id);

    if page.load().await.is_some() {
        return Err("Failed to load product".to_string());
    }

    let outcome = page.revert_to(&args.version).await;

    finish(ctx, outcome).await?;

    let Some(product) = page.product() else {
        return Ok(());
    };

    write_product(io::stdout().lock(), product, &page.history(), ctx.currency)
        .map_err(output_error)
}

use std::io;

use clap::Args;
use prodsnap::{
    feed::FeedQuery,
    products::{ProductId, VersionId},
};
use prodsnap_app::{
    context::AppContext,
    pages::{MountGuard, versions::VersionsPage},
    render::versions::write_versions,
};

use crate::cli::{finish, output_error};

#[derive(Debug, Args)]
pub(crate) struct RevertVersionArgs {
    /// Product id
    product_id: ProductId,

    /// Id of the version to restore
    version_id: VersionId,
}

pub(crate) async fn run(ctx: &AppContext, args: RevertVersionArgs) -> Result<(), String> {
    let mut page = VersionsPage::new(ctx.api.clone(), MountGuard::new(), FeedQuery::default());
    page.load().await;

    let outcome = page.revert(&args.product_id, &args.version_id).await;

    finish(ctx, outcome).await?;

    write_versions(io::stdout().lock(), &page).map_err(output_error)
}

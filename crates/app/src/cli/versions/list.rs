use clap::Args;
use prodsnap::feed::{FeedQuery, VersionFilter, VersionSort};
use prodsnap_app::context::AppContext;

use crate::cli::views;

#[derive(Debug, Args)]
pub(crate) struct ListVersionsArgs {
    /// Case-insensitive match on product name, changes or version number
    #[arg(long, short, default_value = "")]
    search: String,

    /// Version filter
    #[arg(long, default_value_t = VersionFilter::default())]
    filter: VersionFilter,

    /// Sort order
    #[arg(long, default_value_t = VersionSort::default())]
    sort: VersionSort,
}

pub(crate) async fn run(ctx: &AppContext, args: ListVersionsArgs) -> Result<(), String> {
    views::versions(
        ctx,
        FeedQuery {
            search: args.search,
            filter: args.filter,
            sort: args.sort,
        },
    )
    .await
}

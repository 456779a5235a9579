use std::io;

use prodsnap::{catalog::CatalogQuery, feed::FeedQuery, products::ProductId};
use prodsnap_app::{
    context::AppContext,
    navigation::{Route, sidebar},
    pages::{
        MountGuard, analytics::AnalyticsPage, catalog::CatalogPage, dashboard::DashboardPage,
        placeholder::Placeholder, product_detail::ProductDetailPage, versions::VersionsPage,
    },
    render::{
        self, catalog::write_catalog, dashboard, product::write_product, versions::write_versions,
    },
};
use tracing::{error, warn};

use crate::cli::output_error;

/// Render the view at `route`.
pub(crate) async fn show(ctx: &AppContext, route: &Route) -> Result<(), String> {
    match route {
        Route::Dashboard => {
            let mut page = DashboardPage::new(ctx.api.clone(), MountGuard::new());
            page.load().await;

            dashboard::write_dashboard(
                io::stdout().lock(),
                &page,
                &ctx.session.user().name,
                ctx.currency,
            )
            .map_err(output_error)
        }
        Route::Products => catalog(ctx, CatalogQuery::default()).await,
        Route::NewProduct => {
            render::write_placeholder(io::stdout().lock(), &NEW_PRODUCT).map_err(output_error)
        }
        Route::Product(id) | Route::EditProduct(id) => product(ctx, id).await,
        Route::Versions => versions(ctx, FeedQuery::default()).await,
        Route::Analytics => {
            let mut page =
                AnalyticsPage::new(ctx.api.clone(), MountGuard::new(), ctx.features.analytics);
            page.load().await;

            dashboard::write_analytics(io::stdout().lock(), &page).map_err(output_error)
        }
        Route::Orders | Route::Settings => placeholder(route),
        Route::NotFound(path) => {
            error!(%path, "404: no view for route");
            placeholder(route)
        }
    }
}

/// Render the catalog with `query`.
pub(crate) async fn catalog(ctx: &AppContext, query: CatalogQuery) -> Result<(), String> {
    let mut page = CatalogPage::new(ctx.api.clone(), MountGuard::new(), query);
    page.load().await;

    write_catalog(io::stdout().lock(), &page, ctx.currency).map_err(output_error)
}

/// Render the version feed with `query`.
pub(crate) async fn versions(ctx: &AppContext, query: FeedQuery) -> Result<(), String> {
    let mut page = VersionsPage::new(ctx.api.clone(), MountGuard::new(), query);
    page.load().await;

    write_versions(io::stdout().lock(), &page).map_err(output_error)
}

/// Render a product, falling back to the catalog when it cannot be loaded.
pub(crate) async fn product(ctx: &AppContext, id: &ProductId) -> Result<(), String> {
    let mut page = ProductDetailPage::new(ctx.api.clone(), MountGuard::new(), id.clone());

    if let Some(redirect) = page.load().await {
        warn!(product_id = %id, %redirect, "product unavailable; redirecting");
        return catalog(ctx, CatalogQuery::default()).await;
    }

    let Some(product) = page.product() else {
        return Ok(());
    };

    write_product(io::stdout().lock(), product, &page.history(), ctx.currency)
        .map_err(output_error)
}

/// Render the sidebar with `current` highlighted.
pub(crate) fn nav(ctx: &AppContext, current: &Route) -> Result<(), String> {
    render::write_sidebar(io::stdout().lock(), &sidebar(&ctx.features), current)
        .map_err(output_error)
}

fn placeholder(route: &Route) -> Result<(), String> {
    let placeholder = Placeholder::for_route(route).unwrap_or(Placeholder::NOT_FOUND);

    render::write_placeholder(io::stdout().lock(), &placeholder).map_err(output_error)
}

const NEW_PRODUCT: Placeholder = Placeholder {
    title: "Create New Product",
    badge: None,
    message: "Run `prodsnap products new --help` to see the form fields.",
};

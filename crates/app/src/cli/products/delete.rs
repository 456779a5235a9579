use std::io::{self, BufRead, Write};

use clap::Args;
use prodsnap::products::ProductId;
use prodsnap_app::{
    context::AppContext,
    pages::{MountGuard, Outcome, product_detail::ProductDetailPage},
};

use crate::cli::finish;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product id
    product_id: ProductId,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub(crate) async fn run(ctx: &AppContext, args: DeleteProductArgs) -> Result<(), String> {
    let mut page = ProductDetailPage::new(ctx.api.clone(), MountGuard::new(), args.product_id);

    if page.load().await.is_some() {
        return Err("Failed to load product".to_string());
    }

    let outcome = if args.yes {
        page.delete(&mut |_: &str| true).await
    } else {
        page.delete(&mut ask).await
    };

    if outcome == Outcome::none() {
        return Err("delete cancelled".to_string());
    }

    finish(ctx, outcome).await
}

/// Prompt on stderr and read the answer from stdin.
fn ask(prompt: &str) -> bool {
    let mut stderr = io::stderr().lock();

    if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
        return false;
    }

    let mut answer = String::new();

    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

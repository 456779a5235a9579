use std::{io, path::PathBuf};

use clap::Args;
use prodsnap::{
    forms::ImageUpload,
    pricing::parse_price,
    products::ProductId,
};
use prodsnap_app::{
    context::AppContext,
    pages::{MountGuard, edit_product::EditProductPage},
    render::write_form_errors,
};

use crate::cli::{finish, output_error};

#[derive(Debug, Args)]
pub(crate) struct EditProductArgs {
    /// Product id
    product_id: ProductId,

    /// What this edit changes
    #[arg(long)]
    changes: String,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New price
    #[arg(long, value_parser = parse_price)]
    price: Option<f64>,

    /// Replacement image, up to 5MB
    #[arg(long)]
    image: Option<PathBuf>,
}

pub(crate) async fn run(ctx: &AppContext, args: EditProductArgs) -> Result<(), String> {
    let image = args
        .image
        .as_deref()
        .map(ImageUpload::from_path)
        .transpose()
        .map_err(|error| error.to_string())?;

    let mut page = EditProductPage::new(
        ctx.api.clone(),
        MountGuard::new(),
        ctx.session.clone(),
        args.product_id,
    );

    if page.load().await.is_some() {
        return Err("Failed to load product".to_string());
    }

    if let Some(name) = args.name {
        page.form.name = name;
    }

    if let Some(description) = args.description {
        page.form.description = description;
    }

    if let Some(price) = args.price {
        page.form.price = price;
    }

    page.form.changes = args.changes;
    page.form.image = image;

    let outcome = page.submit().await;

    if !page.errors.is_empty() {
        write_form_errors(io::stderr().lock(), &page.errors).map_err(output_error)?;
        return Err("Product not updated".to_string());
    }

    finish(ctx, outcome).await
}

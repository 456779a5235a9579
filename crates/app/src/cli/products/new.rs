use std::{io, path::PathBuf};

use clap::Args;
use prodsnap::{
    forms::{ImageUpload, NewProductForm},
    pricing::parse_price,
};
use prodsnap_app::{
    context::AppContext,
    pages::new_product::NewProductPage,
    render::write_form_errors,
};

use crate::cli::{finish, output_error};

#[derive(Debug, Args)]
pub(crate) struct NewProductArgs {
    /// Display name, at least 3 characters
    #[arg(long)]
    name: String,

    /// Description, at least 10 characters
    #[arg(long)]
    description: String,

    /// Price, e.g. `24.99`
    #[arg(long, value_parser = parse_price)]
    price: f64,

    /// Number of the first version
    #[arg(long, default_value = "1.0.0")]
    initial_version: String,

    /// Notes for the first version
    #[arg(long, default_value = "Initial product launch")]
    version_notes: String,

    /// Product image, up to 5MB
    #[arg(long)]
    image: Option<PathBuf>,
}

pub(crate) async fn run(ctx: &AppContext, args: NewProductArgs) -> Result<(), String> {
    let image = args
        .image
        .as_deref()
        .map(ImageUpload::from_path)
        .transpose()
        .map_err(|error| error.to_string())?;

    let mut page = NewProductPage::new(ctx.api.clone(), ctx.session.clone());

    page.form = NewProductForm {
        name: args.name,
        description: args.description,
        price: args.price,
        initial_version: args.initial_version,
        version_notes: args.version_notes,
        image,
    };

    let outcome = page.submit().await;

    if !page.errors.is_empty() {
        write_form_errors(io::stderr().lock(), &page.errors).map_err(output_error)?;
        return Err("Product not created".to_string());
    }

    finish(ctx, outcome).await
}

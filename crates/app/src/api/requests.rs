//! Request Bodies

use prodsnap::{
    forms::{ImageUpload, NewProduct, ProductEdit},
    products::VersionId,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// JSON body of a revert request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RevertRequest<'a> {
    pub version_id: &'a VersionId,
}

/// Text fields of a create submission, in send order.
pub(crate) fn new_product_fields(product: &NewProduct) -> Vec<(&'static str, String)> {
    vec![
        ("name", product.name.clone()),
        ("description", product.description.clone()),
        ("price", product.price.to_string()),
        ("versionNotes", product.version_notes.clone()),
        ("initialVersion", product.initial_version.clone()),
        ("createdBy", product.created_by.clone()),
    ]
}

/// Text fields of an edit submission, in send order.
///
/// The name goes out as both `title` and `name`; backends read either.
pub(crate) fn edit_fields(edit: &ProductEdit) -> Vec<(&'static str, String)> {
    vec![
        ("title", edit.name.clone()),
        ("name", edit.name.clone()),
        ("description", edit.description.clone()),
        ("price", edit.price.to_string()),
        ("changes", edit.changes.clone()),
        ("createdBy", edit.created_by.clone()),
    ]
}

pub(crate) fn new_product_form(product: NewProduct) -> Result<Form, reqwest::Error> {
    let form = text_form(new_product_fields(&product));

    Ok(form.part("image", image_part(product.image)?))
}

pub(crate) fn edit_form(edit: ProductEdit) -> Result<Form, reqwest::Error> {
    let form = text_form(edit_fields(&edit));

    match edit.image {
        Some(image) => Ok(form.part("image", image_part(image)?)),
        None => Ok(form),
    }
}

fn text_form(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

fn image_part(image: ImageUpload) -> Result<Part, reqwest::Error> {
    Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.content_type)
}

//! Forms
//!
//! Create and edit form input, validated before anything is sent to the
//! backend. A form that fails validation never produces a submission.

pub mod errors;
pub mod image;
pub mod product;

pub use errors::FormErrors;
pub use image::{ImageError, ImageUpload, MAX_IMAGE_BYTES, content_type_for};
pub use product::{EditProductForm, NewProduct, NewProductForm, ProductEdit};

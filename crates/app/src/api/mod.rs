//! Catalog backend API

pub mod errors;
mod requests;
pub mod service;

pub use errors::ApiError;
pub use service::*;

//! `ProdSnap`
//!
//! Product catalog domain: products and their append-only version history,
//! catalog and version-feed projections, form validation and price display.

pub mod analytics;
pub mod catalog;
pub mod feed;
pub mod forms;
pub mod ids;
pub mod pricing;
pub mod products;

//! `ProdSnap` admin client: backend API, pages and terminal rendering.

pub mod api;
pub mod config;
pub mod context;
pub mod navigation;
pub mod notifications;
pub mod observability;
pub mod pages;
pub mod render;
pub mod session;

#[cfg(test)]
mod test;

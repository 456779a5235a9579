//! Render
//!
//! Terminal rendering for every page. Writers take any `io::Write` so the
//! output can be captured in tests.

use std::{io, ops::Range};

use jiff::Timestamp;
use prodsnap::{catalog::EmptyState, forms::FormErrors};
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    navigation::{NavItem, Route},
    notifications::Notification,
    pages::placeholder::Placeholder,
};

pub mod catalog;
pub mod dashboard;
pub mod product;
pub mod versions;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed
    #[error("failed to write output")]
    IO(#[from] io::Error),
}

/// Short calendar date, e.g. `Jan 15, 2025`.
#[must_use]
pub fn date(at: Timestamp) -> String {
    at.strftime("%b %-d, %Y").to_string()
}

/// Build a table with a bold header row and the given columns right-aligned.
pub(crate) fn table(builder: Builder, right_aligned: Range<usize>) -> Table {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    if !right_aligned.is_empty() {
        table.modify(Columns::new(right_aligned), Alignment::right());
    }

    table
}

/// Page heading with an optional line underneath.
pub(crate) fn write_heading(
    out: &mut impl io::Write,
    title: &str,
    subtitle: Option<&str>,
) -> Result<(), RenderError> {
    writeln!(out, "\x1b[1m{title}\x1b[0m")?;

    if let Some(subtitle) = subtitle {
        writeln!(out, "{subtitle}")?;
    }

    Ok(())
}

/// Empty-state block shown in place of a table.
pub(crate) fn write_empty(out: &mut impl io::Write, empty: &EmptyState) -> Result<(), RenderError> {
    writeln!(out, "\n  {}\n  {}\n", empty.title, empty.hint)?;

    Ok(())
}

/// Print a notification.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_notification(
    mut out: impl io::Write,
    notification: &Notification,
) -> Result<(), RenderError> {
    writeln!(out, "{notification}")?;

    Ok(())
}

/// Print field errors, one line per message.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_form_errors(mut out: impl io::Write, errors: &FormErrors) -> Result<(), RenderError> {
    for (field, messages) in errors.fields() {
        for message in messages {
            writeln!(out, "  {field}: {message}")?;
        }
    }

    Ok(())
}

/// Print a placeholder page.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_placeholder(
    mut out: impl io::Write,
    placeholder: &Placeholder,
) -> Result<(), RenderError> {
    write_heading(&mut out, placeholder.title, None)?;
    writeln!(out, "\n{}", placeholder.message)?;

    if let Some(badge) = placeholder.badge {
        writeln!(out, "\n[{badge}]")?;
    }

    if let Some((label, route)) = placeholder.action() {
        writeln!(out, "\n{label}: {route}")?;
    }

    Ok(())
}

/// Print the sidebar, marking `current`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_sidebar(
    mut out: impl io::Write,
    items: &[NavItem],
    current: &Route,
) -> Result<(), RenderError> {
    for item in items {
        let marker = if active(&item.route, current) { '>' } else { ' ' };

        writeln!(out, "{marker} {:<16} {}", item.label, item.route)?;
    }

    Ok(())
}

fn active(item: &Route, current: &Route) -> bool {
    match (item, current) {
        (
            Route::Products,
            Route::NewProduct | Route::Product(_) | Route::EditProduct(_),
        ) => true,
        _ => item == current,
    }
}

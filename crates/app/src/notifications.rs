//! Notifications
//!
//! Transient messages raised by page actions.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Action completed
    Success,

    /// Action failed
    Error,

    /// Informational
    Info,
}

/// Toast-style message with an optional description line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: Level,

    /// Headline
    pub title: String,

    /// Optional detail
    pub description: Option<String>,
}

impl Notification {
    /// Success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Informational notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a description when one is available.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(ToString::to_string);
        self
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let marker = match self.level {
            Level::Success => "✓",
            Level::Error => "✗",
            Level::Info => "i",
        };

        write!(f, "{marker} {}", self.title)?;

        if let Some(description) = &self.description {
            write!(f, "\n  {description}")?;
        }

        Ok(())
    }
}

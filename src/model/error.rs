//! Error types for folio.
//!
//! A small `thiserror` taxonomy composed with `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from startup and the event loop
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`ContentError`] - portfolio content read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - `std::io::Error` - terminal failures
//! - [`ValidationError`] - contact form field missing (recoverable, shown inline)
//! - [`SubmissionError`] - contact transport failure (recoverable, retry allowed)
//!
//! # Recovery Strategy
//!
//! Nothing in the page itself is fatal. Validation and submission errors are
//! rendered next to the form and the form stays editable. Only startup
//! failures (unreadable explicit config or content) and terminal I/O errors
//! end the program.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Portfolio content could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Tracing could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering I/O failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading portfolio content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// File could not be read.
    #[error("Failed to read content file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// File is not valid content JSON.
    #[error("Invalid content JSON in {path}: {reason}")]
    ParseError {
        /// Path with invalid JSON.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// The contact form's required fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// Every field in form order.
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Field after this one, wrapping.
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    /// Field before this one, wrapping.
    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A required contact field was blank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The named field is empty or whitespace.
    #[error("{0} is required")]
    EmptyField(ContactField),
}

/// The contact transport failed to deliver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Transport-level failure; the user may retry.
    #[error("Message could not be sent: {reason}")]
    Transport {
        /// What went wrong.
        reason: String,
    },
}

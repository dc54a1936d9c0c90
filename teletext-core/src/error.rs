//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Router-level error type
///
/// Returned from `navigate_to_page` and mirrored into the navigation state so
/// polling callers can observe it as well.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationError {
    /// The page id is not one of `NNN`, `NNN-k` or `NNN-k-j`
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(String),

    /// The fetcher resolved without a page
    #[error("Page {0} not found")]
    PageNotFound(String),

    /// The fetcher itself failed
    #[error("Navigation to page {page_id} failed: {message}")]
    NavigationFailed { page_id: String, message: String },

    /// Re-fetching a history entry failed (back/forward)
    #[error("Could not load page {page_id}: {message}")]
    FetchError { page_id: String, message: String },
}

impl NavigationError {
    /// Stable machine-readable code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPageNumber(_) => "INVALID_PAGE_NUMBER",
            Self::PageNotFound(_) => "PAGE_NOT_FOUND",
            Self::NavigationFailed { .. } => "NAVIGATION_FAILED",
            Self::FetchError { .. } => "FETCH_ERROR",
        }
    }

    /// Whether it is expected behavior (user input, page does not exist) - used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidPageNumber(_) | Self::PageNotFound(_) => true,
            Self::NavigationFailed { .. } | Self::FetchError { .. } => false,
        }
    }
}

/// Router Result type alias
pub type NavigationResult<T> = std::result::Result<T, NavigationError>;

/// Transport-level failure reported by a `PageFetcher`
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PageFetchError {
    /// Network or storage layer failure
    #[error("{0}")]
    Transport(String),

    /// The request was cancelled through its signal
    #[error("Request cancelled")]
    Cancelled,
}

/// Mode-specific input validation failure
///
/// `Display` is the message shown to the user; `hint()` is the short prompt
/// rendered next to it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputValidationError {
    #[error("Input is disabled on this page")]
    Disabled,

    #[error("Input cannot be empty")]
    Empty,

    #[error("Input exceeds maximum length of {max}")]
    TooLong { max: usize },

    #[error("Please enter a single digit")]
    NotSingleDigit,

    #[error("Invalid option. Valid options: {}", .options.join(", "))]
    InvalidOption { options: Vec<String> },

    #[error("Please enter 1-{max} digits")]
    NotDigits { max: usize },

    #[error("Page number must be between 100 and 999")]
    OutOfRange,

    #[error("Input cannot be only whitespace")]
    WhitespaceOnly,
}

impl InputValidationError {
    /// Short prompt telling the user what would have been accepted
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            Self::Disabled => "NO INPUT ON THIS PAGE".to_string(),
            Self::Empty | Self::WhitespaceOnly => "TYPE SOMETHING FIRST".to_string(),
            Self::TooLong { max } => format!("MAX {max} CHARACTERS"),
            Self::NotSingleDigit => "PRESS ONE DIGIT".to_string(),
            Self::InvalidOption { options } => format!("PRESS {}", options.join("/")),
            Self::NotDigits { max } => format!("ENTER {max} DIGITS"),
            Self::OutOfRange => "ENTER 100-999".to_string(),
        }
    }
}

/// Error reported by the input handler through `InputListener::on_error`
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputError {
    #[error("{0}")]
    Validation(#[from] InputValidationError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),
}

/// Configuration loading error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON for `TeletextConfig`
    #[error("Config parse error: {0}")]
    Parse(String),

    /// The document parsed but holds unusable values
    #[error("Invalid config: {0}")]
    Invalid(String),
}

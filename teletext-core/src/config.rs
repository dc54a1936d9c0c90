//! Core configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::{DEFAULT_COLUMNS, DEFAULT_GUTTER, WIDTH};
use crate::types::{is_valid_page_number, MAX_PAGE, MIN_PAGE};

/// Default bound on the history stack
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 50;
/// Default home page
pub const DEFAULT_HOME_PAGE: &str = "100";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeletextConfig {
    pub router: RouterConfig,
    pub renderer: RendererConfig,
}

impl TeletextConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the router or renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.router.validate()?;
        self.renderer.validate()
    }
}

/// Navigation router settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterConfig {
    /// Oldest history entries are evicted past this size
    pub max_history_size: usize,
    /// Target of the `INDEX` hint
    pub home_page: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
            home_page: DEFAULT_HOME_PAGE.to_string(),
        }
    }
}

impl RouterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history_size == 0 {
            return Err(ConfigError::Invalid(
                "maxHistorySize must be at least 1".to_string(),
            ));
        }
        if !is_valid_page_number(&self.home_page) {
            return Err(ConfigError::Invalid(format!(
                "homePage '{}' is not a valid page number",
                self.home_page
            )));
        }
        Ok(())
    }
}

/// Inclusive range of base page numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u16,
    pub end: u16,
}

impl PageRange {
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, base: u16) -> bool {
        (self.start..=self.end).contains(&base)
    }
}

/// Page renderer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererConfig {
    /// Base page numbers laid out in columns
    pub multi_column_ranges: Vec<PageRange>,
    pub columns: usize,
    pub gutter: usize,
    /// Show `HH:MM:SS` in the header
    pub show_clock: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            multi_column_ranges: vec![PageRange::new(200, 299)],
            columns: DEFAULT_COLUMNS,
            gutter: DEFAULT_GUTTER,
            show_clock: true,
        }
    }
}

impl RendererConfig {
    /// Whether pages with this base number use the multi-column layout
    #[must_use]
    pub fn is_multi_column(&self, base: u16) -> bool {
        self.columns > 1 && self.multi_column_ranges.iter().any(|r| r.contains(base))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for range in &self.multi_column_ranges {
            if range.start > range.end || range.start < MIN_PAGE || range.end > MAX_PAGE {
                return Err(ConfigError::Invalid(format!(
                    "multiColumnRanges entry {}-{} is outside {MIN_PAGE}-{MAX_PAGE}",
                    range.start, range.end
                )));
            }
        }
        if self.columns > 1 && self.gutter * (self.columns - 1) + self.columns > WIDTH {
            return Err(ConfigError::Invalid(format!(
                "{} columns with gutter {} do not fit in {WIDTH} characters",
                self.columns, self.gutter
            )));
        }
        Ok(())
    }
}

//! Page related type definitions

use serde::{Deserialize, Serialize};

use super::input::InputMode;
use super::page_id::PageId;

/// Fastext link color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkColor {
    Red,
    Green,
    Yellow,
    Blue,
}

impl LinkColor {
    /// Fastext key order
    pub const ALL: [LinkColor; 4] = [Self::Red, Self::Green, Self::Yellow, Self::Blue];
}

/// Navigational link shown on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub label: String,
    pub target_page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<LinkColor>,
}

impl PageLink {
    #[must_use]
    pub fn new(label: impl Into<String>, target_page: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_page: target_page.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn colored(mut self, color: LinkColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Progress indicator for multi-step pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
}

/// Optional page metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    /// Explicit input mode, overrides every heuristic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
    /// Acceptable single-character selections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_options: Option<Vec<String>>,
    pub error_page: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    /// Replaces the generated footer hints verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_hints: Option<Vec<String>>,
    pub use_layout_manager: bool,
    pub rendered_with_layout_engine: bool,
}

impl PageMeta {
    #[must_use]
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_input_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_custom_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_hints = Some(hints.into_iter().map(Into::into).collect());
        self
    }

    /// Rows are final and must not be laid out again
    #[must_use]
    pub fn is_pre_rendered(&self) -> bool {
        self.use_layout_manager || self.rendered_with_layout_engine
    }
}

/// Unit of navigation and display
///
/// `rows` is either the exact 24-row grid (when `meta.is_pre_rendered()`) or
/// raw content lines for the page renderer to lay out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub rows: Vec<String>,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl Page {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rows: Vec::new(),
            links: Vec::new(),
            meta: PageMeta::default(),
        }
    }

    #[must_use]
    pub fn with_rows<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: PageLink) -> Self {
        self.links.push(link);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Parsed id, `None` for ids outside the addressable shapes
    #[must_use]
    pub fn page_id(&self) -> Option<PageId> {
        self.id.parse().ok()
    }

    /// Numeric base of the id (`202` for `"202-1"`)
    #[must_use]
    pub fn base_number(&self) -> Option<u16> {
        self.page_id().map(|id| id.base)
    }

    /// Options a single-digit selection is checked against
    ///
    /// `meta.inputOptions` when present, otherwise the labels of single-digit
    /// links. Empty means "any digit".
    #[must_use]
    pub fn selection_options(&self) -> Vec<String> {
        match &self.meta.input_options {
            Some(options) if !options.is_empty() => options.clone(),
            _ => self
                .links
                .iter()
                .filter(|link| link.label.len() == 1 && link.label.bytes().all(|b| b.is_ascii_digit()))
                .map(|link| link.label.clone())
                .collect(),
        }
    }

    /// Target of the link whose label is exactly `label`
    #[must_use]
    pub fn link_target(&self, label: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.label == label)
            .map(|link| link.target_page.as_str())
    }
}

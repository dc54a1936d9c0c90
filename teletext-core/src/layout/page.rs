//! Full-page assembly

use super::columns::{calculate_column_widths, flow_text_to_columns, merge_columns};
use super::grid::{blank_row, normalize_output, render_footer, render_header};
use super::text::{pad_text, wrap_text, Align};
use super::{CONTENT_HEIGHT, DEFAULT_COLUMNS, DEFAULT_GUTTER, HEADER_HEIGHT, WIDTH};

/// Body of a page before layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Free text, wrapped as a whole
    Text(String),
    /// Pre-split lines, each wrapped on its own; blank lines are kept
    Lines(Vec<String>),
}

impl Default for PageContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for PageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for PageContent {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl PageContent {
    fn wrap(&self, width: usize) -> Vec<String> {
        match self {
            Self::Text(text) => wrap_text(text, Some(width)),
            Self::Lines(lines) => lines
                .iter()
                .flat_map(|line| {
                    if line.trim().is_empty() {
                        vec![String::new()]
                    } else {
                        wrap_text(line, Some(width))
                    }
                })
                .collect(),
        }
    }
}

/// Input to `render_single_column` / `render_multi_column`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub page_number: String,
    pub title: String,
    pub content: PageContent,
    pub timestamp: Option<String>,
    pub hints: Vec<String>,
    /// Ignored by `render_single_column`
    pub columns: usize,
    /// Ignored by `render_single_column`
    pub gutter: usize,
}

impl LayoutOptions {
    #[must_use]
    pub fn new(page_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            page_number: page_number.into(),
            title: title.into(),
            content: PageContent::default(),
            timestamp: None,
            hints: Vec::new(),
            columns: DEFAULT_COLUMNS,
            gutter: DEFAULT_GUTTER,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<PageContent>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize, gutter: usize) -> Self {
        self.columns = columns;
        self.gutter = gutter;
        self
    }
}

/// Header + full-width wrapped content + footer
#[must_use]
pub fn render_single_column(options: &LayoutOptions) -> Vec<String> {
    let body = options.content.wrap(WIDTH);
    assemble(options, &body)
}

/// Header + content flowed over `options.columns` columns + footer
#[must_use]
pub fn render_multi_column(options: &LayoutOptions) -> Vec<String> {
    let widths = calculate_column_widths(WIDTH, options.columns, options.gutter);
    // wrap to the narrowest column so the per-column re-wrap keeps chunk heights
    let narrowest = widths.iter().copied().min().unwrap_or(WIDTH);
    let lines = options.content.wrap(narrowest);
    let columns = flow_text_to_columns(&lines, &widths);
    let body = merge_columns(&columns, &widths, options.gutter);
    assemble(options, &body)
}

fn assemble(options: &LayoutOptions, body: &[String]) -> Vec<String> {
    let mut rows = render_header(&options.page_number, &options.title, options.timestamp.as_deref());

    // rows past the content area are dropped, not continued elsewhere
    rows.extend(
        body.iter()
            .take(CONTENT_HEIGHT)
            .map(|line| pad_text(line, WIDTH, Align::Left)),
    );
    rows.resize_with(HEADER_HEIGHT + CONTENT_HEIGHT, blank_row);
    rows.extend(render_footer(&options.hints));

    normalize_output(&rows)
}

//! Page renderer
//!
//! Lays out pages that are not pre-rendered, choosing the column count from
//! the page number.

use chrono::Local;

use crate::config::RendererConfig;
use crate::layout::{render_multi_column, render_single_column, LayoutOptions};
use crate::types::Page;

use super::{NavigationHintService, NavigationRouter};

/// Header clock format
const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Page renderer
#[derive(Clone, Default)]
pub struct PageRenderer {
    hints: NavigationHintService,
    config: RendererConfig,
}

impl PageRenderer {
    #[must_use]
    pub fn new(hints: NavigationHintService, config: RendererConfig) -> Self {
        Self { hints, config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render with the local wall clock in the header (if enabled)
    pub fn render(&self, page: &Page, can_go_back: bool) -> Vec<String> {
        let clock = self
            .config
            .show_clock
            .then(|| Local::now().format(CLOCK_FORMAT).to_string());
        self.render_at(page, can_go_back, clock.as_deref())
    }

    /// Render with an explicit header timestamp
    ///
    /// Pre-rendered pages are returned unmodified.
    pub fn render_at(&self, page: &Page, can_go_back: bool, timestamp: Option<&str>) -> Vec<String> {
        if page.meta.is_pre_rendered() {
            log::debug!("Page {} is pre-rendered, passing through", page.id);
            return page.rows.clone();
        }

        let mut options = LayoutOptions::new(page.id.as_str(), page.title.as_str())
            .with_content(page.rows.clone())
            .with_hints(self.hints.hint_texts(page, can_go_back));
        if let Some(timestamp) = timestamp {
            options = options.with_timestamp(timestamp);
        }

        match page.base_number() {
            Some(base) if self.config.is_multi_column(base) => {
                render_multi_column(&options.with_columns(self.config.columns, self.config.gutter))
            }
            _ => render_single_column(&options),
        }
    }

    /// Render the router's current page, `None` before the first navigation
    pub fn render_current(&self, router: &NavigationRouter) -> Option<Vec<String>> {
        router
            .current_page()
            .map(|page| self.render(page, router.can_go_back()))
    }
}

//! Input mode resolution abstract Trait
//!
//! One resolver is shared by the navigation router and the input context
//! manager so both always agree on a page's mode.

use crate::types::{InputMode, Page, PageId};

/// Title keywords that turn a 5xx page into a free-text page
const TEXT_TITLE_KEYWORDS: &[&str] = &["question", "ask", "enter"];

/// Input Mode Resolver Trait
pub trait InputModeResolver: Send + Sync {
    /// Infer the input mode for `page`
    fn resolve(&self, page: &Page) -> InputMode;
}

/// Heuristic resolver used by default
///
/// Priority:
/// 1. explicit `meta.inputMode`
/// 2. `meta.errorPage` => disabled
/// 3. 500-599 page whose title mentions question/ask/enter => text
/// 4. up to 9 `inputOptions`, all single digits => single
/// 5. links labelled `1..N` in order (N <= 9) => single
/// 6. 500-699 page with 1-9 `inputOptions` => single
/// 7. `NNN-k` sub-page => double
/// 8. triple
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInputModeResolver;

impl DefaultInputModeResolver {
    fn is_text_entry_page(page: &Page, base: Option<u16>) -> bool {
        if !base.is_some_and(|b| (500..600).contains(&b)) {
            return false;
        }
        let title = page.title.to_lowercase();
        TEXT_TITLE_KEYWORDS.iter().any(|kw| title.contains(kw))
    }

    fn has_single_digit_options(page: &Page) -> bool {
        page.meta.input_options.as_ref().is_some_and(|options| {
            !options.is_empty()
                && options.len() <= 9
                && options
                    .iter()
                    .all(|o| o.len() == 1 && o.bytes().all(|b| b.is_ascii_digit()))
        })
    }

    fn has_numbered_menu(page: &Page) -> bool {
        (1..=9).contains(&page.links.len())
            && page
                .links
                .iter()
                .enumerate()
                .all(|(i, link)| link.label == (i + 1).to_string())
    }

    fn is_selection_range(page: &Page, base: Option<u16>) -> bool {
        base.is_some_and(|b| (500..700).contains(&b))
            && page
                .meta
                .input_options
                .as_ref()
                .is_some_and(|options| (1..=9).contains(&options.len()))
    }
}

impl InputModeResolver for DefaultInputModeResolver {
    fn resolve(&self, page: &Page) -> InputMode {
        if let Some(mode) = page.meta.input_mode {
            return mode;
        }
        if page.meta.error_page {
            return InputMode::Disabled;
        }

        let id: Option<PageId> = page.page_id();
        let base = id.map(|id| id.base);

        if Self::is_text_entry_page(page, base) {
            InputMode::Text
        } else if Self::has_single_digit_options(page)
            || Self::has_numbered_menu(page)
            || Self::is_selection_range(page, base)
        {
            InputMode::Single
        } else if id.is_some_and(|id| id.is_sub_page()) {
            InputMode::Double
        } else {
            InputMode::Triple
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageLink, PageMeta};

    fn resolve(page: &Page) -> InputMode {
        DefaultInputModeResolver.resolve(page)
    }

    #[test]
    fn explicit_mode_wins() {
        let page = Page::new("202-1", "Story")
            .with_meta(PageMeta::default().with_input_mode(InputMode::Text));
        assert_eq!(resolve(&page), InputMode::Text);
    }

    #[test]
    fn error_pages_are_disabled() {
        let mut meta = PageMeta::default();
        meta.error_page = true;
        let page = Page::new("404", "Not Found").with_meta(meta);
        assert_eq!(resolve(&page), InputMode::Disabled);
    }

    #[test]
    fn question_pages_take_text() {
        assert_eq!(resolve(&Page::new("510", "Ask the Oracle")), InputMode::Text);
        assert_eq!(resolve(&Page::new("520", "Enter your QUESTION")), InputMode::Text);
        // keyword outside the 5xx range does nothing
        assert_eq!(resolve(&Page::new("410", "Ask the Oracle")), InputMode::Triple);
    }

    #[test]
    fn digit_options_take_single() {
        let page = Page::new("300", "Quiz")
            .with_meta(PageMeta::default().with_input_options(["1", "2", "3"]));
        assert_eq!(resolve(&page), InputMode::Single);

        let letters = Page::new("300", "Quiz")
            .with_meta(PageMeta::default().with_input_options(["A", "B"]));
        assert_eq!(resolve(&letters), InputMode::Triple);
    }

    #[test]
    fn numbered_menu_takes_single() {
        let page = Page::new("200", "News")
            .with_link(PageLink::new("1", "201"))
            .with_link(PageLink::new("2", "202"));
        assert_eq!(resolve(&page), InputMode::Single);

        let out_of_order = Page::new("200", "News")
            .with_link(PageLink::new("2", "202"))
            .with_link(PageLink::new("1", "201"));
        assert_eq!(resolve(&out_of_order), InputMode::Triple);
    }

    #[test]
    fn game_range_options_take_single() {
        let page = Page::new("610", "Adventure")
            .with_meta(PageMeta::default().with_input_options(["N", "S", "E"]));
        assert_eq!(resolve(&page), InputMode::Single);
    }

    #[test]
    fn sub_pages_take_double() {
        assert_eq!(resolve(&Page::new("202-3", "Story")), InputMode::Double);
        assert_eq!(resolve(&Page::new("202-3-2", "Story")), InputMode::Triple);
    }

    #[test]
    fn default_is_triple() {
        assert_eq!(resolve(&Page::new("100", "Index")), InputMode::Triple);
    }
}

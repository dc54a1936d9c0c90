//! Footer hint generation

use std::sync::Arc;

use serde::Serialize;

use crate::config::DEFAULT_HOME_PAGE;
use crate::traits::{DefaultInputModeResolver, InputModeResolver};
use crate::types::{InputMode, LinkColor, Page};

/// Shown when nothing else applies
pub const FALLBACK_HINT: &str = "ENTER PAGE NUMBER";

/// One footer hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationHint {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<LinkColor>,
}

impl NavigationHint {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn colored(text: impl Into<String>, color: LinkColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Navigation hint service
#[derive(Clone)]
pub struct NavigationHintService {
    resolver: Arc<dyn InputModeResolver>,
    home_page: String,
}

impl Default for NavigationHintService {
    fn default() -> Self {
        Self::new(Arc::new(DefaultInputModeResolver), DEFAULT_HOME_PAGE)
    }
}

impl NavigationHintService {
    #[must_use]
    pub fn new(resolver: Arc<dyn InputModeResolver>, home_page: impl Into<String>) -> Self {
        Self {
            resolver,
            home_page: home_page.into(),
        }
    }

    /// Hints for `page`, most important first
    ///
    /// `meta.customHints` replaces everything else.
    pub fn generate(&self, page: &Page, can_go_back: bool) -> Vec<NavigationHint> {
        if let Some(custom) = &page.meta.custom_hints {
            return custom.iter().map(NavigationHint::plain).collect();
        }

        let mut hints = Self::range_hints(page);

        let has_options = page
            .meta
            .input_options
            .as_ref()
            .is_some_and(|options| !options.is_empty());
        if has_options || self.resolver.resolve(page) == InputMode::Single {
            hints.push(NavigationHint::plain(selection_hint(&page.selection_options())));
        }

        if page.id != self.home_page {
            hints.push(NavigationHint::plain(format!("{}=INDEX", self.home_page)));
        }
        if can_go_back {
            hints.push(NavigationHint::plain("BACK=PREVIOUS"));
        }

        for color in LinkColor::ALL {
            let labels: Vec<&str> = page
                .links
                .iter()
                .filter(|link| link.color == Some(color))
                .map(|link| link.label.as_str())
                .collect();
            if !labels.is_empty() {
                hints.push(NavigationHint::colored(labels.join("/"), color));
            }
        }

        if hints.is_empty() {
            hints.push(NavigationHint::plain(FALLBACK_HINT));
        }
        hints
    }

    /// Texts only, ready for `render_footer`
    pub fn hint_texts(&self, page: &Page, can_go_back: bool) -> Vec<String> {
        self.generate(page, can_go_back)
            .into_iter()
            .map(|hint| hint.text)
            .collect()
    }

    /// Status hints placed ahead of everything else
    fn range_hints(page: &Page) -> Vec<NavigationHint> {
        let mut hints = Vec::new();
        if page.meta.loading {
            hints.push(NavigationHint::plain("LOADING..."));
        }
        if let Some(progress) = page.meta.progress {
            hints.push(NavigationHint::plain(format!(
                "{}/{}",
                progress.current, progress.total
            )));
        }
        // 7xx: settings
        if page.base_number().is_some_and(|base| (700..800).contains(&base)) {
            hints.push(NavigationHint::plain("SELECT TO CHANGE"));
        }
        hints
    }
}

/// `SELECT 1-3` for a consecutive digit run, `SELECT 1/3/5` otherwise
fn selection_hint(options: &[String]) -> String {
    let digits: Option<Vec<u32>> = options
        .iter()
        .map(|option| {
            let mut chars = option.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch.to_digit(10),
                _ => None,
            }
        })
        .collect();

    match (options, digits) {
        ([], _) => "SELECT OPTION".to_string(),
        ([first, .., last], Some(digits)) if digits.windows(2).all(|w| w[1] == w[0] + 1) => {
            format!("SELECT {first}-{last}")
        }
        _ => format!("SELECT {}", options.join("/")),
    }
}

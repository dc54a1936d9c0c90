//! Navigation router
//!
//! Owns the current page, the bounded history stack and the transient
//! loading/error status. Every mutating operation takes `&mut self`; UI code
//! that needs to share a router across tasks wraps it in a [`SharedRouter`],
//! whose fair mutex serializes navigations in request order.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::RouterConfig;
use crate::error::{NavigationError, NavigationResult};
use crate::traits::{DefaultInputModeResolver, FetchOptions, FetchResult, InputModeResolver, PageFetcher};
use crate::types::{is_valid_page_number, InputMode, Page, MAX_PAGE, MIN_PAGE};

/// Router shared between tasks; lock it to navigate
pub type SharedRouter = Arc<Mutex<NavigationRouter>>;

/// Router-owned navigation state, read-only from outside
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_page: Option<Page>,
    history: Vec<String>,
    history_index: usize,
    expected_input_length: usize,
    input_buffer: String,
    loading: bool,
    error: Option<NavigationError>,
}

impl NavigationState {
    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.as_ref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// 1/2/3 for digit modes, 0 for text and disabled pages
    pub fn expected_input_length(&self) -> usize {
        self.expected_input_length
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&NavigationError> {
        self.error.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    fn install(&mut self, page: Page, mode: InputMode) {
        self.expected_input_length = mode.expected_length();
        self.input_buffer.clear();
        self.current_page = Some(page);
    }

    /// Push `page_id` after the cursor, dropping forward entries
    fn push_history(&mut self, page_id: &str, max_size: usize) {

        if !self.history.is_empty() {
            self.history.truncate(self.history_index + 1);
        }
        self.history.push(page_id.to_string());
        self.history_index = self.history.len() - 1;

        let max_size = max_size.max(1);
        if self.history.len() > max_size {
            let overflow = self.history.len() - max_size;
            self.history.drain(..overflow);
            self.history_index = self.history_index.saturating_sub(overflow);
        }
    }
}

/// Holds `loading` for the lifetime of one fetch
///
/// Dropping the guard resets the flag, including when the navigation future
/// itself is dropped mid-fetch.
struct LoadingGuard<'a> {
    state: &'a mut NavigationState,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a mut NavigationState) -> Self {
        state.loading = true;
        state.error = None;
        Self { state }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = NavigationState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.loading = false;
    }
}

fn log_failure(err: &NavigationError) {
    if err.is_expected() {
        log::warn!("Navigation rejected [{}]: {err}", err.code());
    } else {
        log::error!("Navigation failed [{}]: {err}", err.code());
    }
}

/// Navigation state machine
pub struct NavigationRouter {
    fetcher: Arc<dyn PageFetcher>,
    resolver: Arc<dyn InputModeResolver>,
    config: RouterConfig,
    state: NavigationState,
}

impl NavigationRouter {
    /// Router with the default config and input-mode heuristics
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_config(fetcher, RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(fetcher: Arc<dyn PageFetcher>, config: RouterConfig) -> Self {
        Self {
            fetcher,
            resolver: Arc::new(DefaultInputModeResolver),
            config,
            state: NavigationState::default(),
        }
    }

    /// Replace the input-mode resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn InputModeResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn into_shared(self) -> SharedRouter {
        Arc::new(Mutex::new(self))
    }

    /// The resolver this router uses, for the input context manager and hints
    pub fn resolver(&self) -> Arc<dyn InputModeResolver> {
        Arc::clone(&self.resolver)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.state.current_page()
    }

    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    pub fn history_index(&self) -> usize {
        self.state.history_index()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&NavigationError> {
        self.state.error()
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    pub fn expected_input_length(&self) -> usize {
        self.state.expected_input_length()
    }

    pub fn input_buffer(&self) -> &str {
        self.state.input_buffer()
    }

    /// Mirror of the input handler's buffer
    pub fn set_input_buffer(&mut self, buffer: &str) {
        buffer.clone_into(&mut self.state.input_buffer);
    }

    pub fn is_valid_page_number(page_id: &str) -> bool {
        is_valid_page_number(page_id)
    }

    pub fn get_page_input_mode(&self, page: &Page) -> InputMode {
        self.resolver.resolve(page)
    }

    /// Mode of the current page, `None` before the first navigation
    pub fn current_input_mode(&self) -> Option<InputMode> {
        self.state.current_page().map(|page| self.resolver.resolve(page))
    }

    /// Validate, fetch and install `page_id`
    ///
    /// On failure the current page is left in place and the error is both
    /// returned and recorded in the state.
    pub async fn navigate_to_page(&mut self, page_id: &str, options: &FetchOptions) -> NavigationResult<()> {
        match self.load(page_id, options).await {
            Ok(()) => Ok(()),
            Err(err) => {
                log_failure(&err);
                self.state.error = Some(err.clone());
                Err(err)
            }
        }
    }

    async fn load(&mut self, page_id: &str, options: &FetchOptions) -> NavigationResult<()> {
        // 1. Validate
        if !is_valid_page_number(page_id) {
            return Err(NavigationError::InvalidPageNumber(page_id.to_string()));
        }

        // 2. Mark loading until this function returns
        let mut state = LoadingGuard::begin(&mut self.state);

        // 3. Fetch
        let result = self.fetcher.fetch(page_id, options).await;
        let FetchResult { page, from_cache } = result.map_err(|e| NavigationError::NavigationFailed {
            page_id: page_id.to_string(),
            message: e.to_string(),
        })?;
        let page = page.ok_or_else(|| NavigationError::PageNotFound(page_id.to_string()))?;

        // 4. Install
        let mode = self.resolver.resolve(&page);
        log::info!("Navigated to page {} (mode: {mode:?}, from cache: {from_cache})", page.id);
        state.push_history(&page.id, self.config.max_history_size);
        state.install(page, mode);
        Ok(())
    }

    /// Step back one history entry; `false` if there is none or it failed to load
    pub async fn navigate_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.revisit(self.state.history_index - 1).await
    }

    /// Step forward one history entry; `false` if there is none or it failed to load
    pub async fn navigate_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.revisit(self.state.history_index + 1).await
    }

    /// Refetch `history[index]` and move the cursor there on success
    async fn revisit(&mut self, index: usize) -> bool {
        let Some(page_id) = self.state.history.get(index).cloned() else {
            return false;
        };

        let mut state = LoadingGuard::begin(&mut self.state);
        let message = match self.fetcher.fetch(&page_id, &FetchOptions::default()).await {
            Ok(FetchResult { page: Some(page), .. }) => {
                let mode = self.resolver.resolve(&page);
                log::info!("Returned to page {} (history {index})", page.id);
                state.history[index].clone_from(&page.id);
                state.history_index = index;
                state.install(page, mode);
                return true;
            }
            Ok(FetchResult { page: None, .. }) => "page no longer exists".to_string(),
            Err(e) => e.to_string(),
        };

        let err = NavigationError::FetchError { page_id, message };
        log_failure(&err);
        state.error = Some(err);
        false
    }

    /// Channel-up: base number + 1, clamped to 999
    pub async fn navigate_up(&mut self) -> bool {
        self.scan(1).await
    }

    /// Channel-down: base number - 1, clamped to 100
    pub async fn navigate_down(&mut self) -> bool {
        self.scan(-1).await
    }

    /// Missing target pages are skipped silently and leave the error untouched
    async fn scan(&mut self, step: i32) -> bool {
        let Some(current) = self.state.current_page() else {
            return false;
        };
        let Some(base) = current.base_number() else {
            return false;
        };

        let target = (i32::from(base) + step).clamp(i32::from(MIN_PAGE), i32::from(MAX_PAGE));
        let target = target.to_string();
        if target == current.id {
            return false;
        }

        let previous_error = self.state.error.clone();
        match self.load(&target, &FetchOptions::default()).await {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Skipping page {target} while scanning: {err}");
                self.state.error = previous_error;
                false
            }
        }
    }
}

//! Page fetching abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::error::PageFetchError;
use crate::types::Page;

/// Per-request options forwarded verbatim to the fetcher
///
/// The router never enforces `signal` itself; honoring it is up to the
/// fetcher implementation.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub signal: Option<CancellationToken>,
    pub session_id: Option<String>,
}

impl FetchOptions {
    #[must_use]
    pub fn with_signal(mut self, signal: CancellationToken) -> Self {
        self.signal = Some(signal);
        self
    }

    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Whether the caller already cancelled this request
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.signal
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Fetch outcome. `page: None` means "not found", which is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub page: Option<Page>,
    pub from_cache: bool,
}

impl FetchResult {
    #[must_use]
    pub fn found(page: Page) -> Self {
        Self {
            page: Some(page),
            from_cache: false,
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            page: None,
            from_cache: false,
        }
    }
}

/// Page source Trait
///
/// Implementations:
/// - `InMemoryPageFetcher` (static page sets, tests)
/// - network/offline-cache fetchers live outside the core
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page by id
    ///
    /// # Arguments
    /// * `page_id` - Page id, already validated by the router
    /// * `options` - Cancellation signal and session id
    async fn fetch(&self, page_id: &str, options: &FetchOptions) -> Result<FetchResult, PageFetchError>;
}

/// In-memory page fetcher
///
/// Default implementation, serves a fixed set of pages.
#[derive(Clone, Default)]
pub struct InMemoryPageFetcher {
    pages: Arc<RwLock<HashMap<String, Page>>>,
}

impl InMemoryPageFetcher {
    /// Create an empty fetcher
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher pre-loaded with `pages`
    #[must_use]
    pub fn with_pages(pages: impl IntoIterator<Item = Page>) -> Self {
        let pages = pages.into_iter().map(|page| (page.id.clone(), page)).collect();
        Self {
            pages: Arc::new(RwLock::new(pages)),
        }
    }

    /// Insert or replace a page
    pub async fn insert(&self, page: Page) {
        self.pages.write().await.insert(page.id.clone(), page);
    }

    /// Remove a page
    pub async fn remove(&self, page_id: &str) -> Option<Page> {
        self.pages.write().await.remove(page_id)
    }
}

#[async_trait]
impl PageFetcher for InMemoryPageFetcher {
    async fn fetch(&self, page_id: &str, options: &FetchOptions) -> Result<FetchResult, PageFetchError> {
        if options.is_cancelled() {
            return Err(PageFetchError::Cancelled);
        }
        Ok(self
            .pages
            .read()
            .await
            .get(page_id)
            .cloned()
            .map_or_else(FetchResult::not_found, FetchResult::found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_inserted_pages() {
        let fetcher = InMemoryPageFetcher::with_pages([Page::new("100", "Index")]);
        fetcher.insert(Page::new("200", "News")).await;

        let result = fetcher.fetch("200", &FetchOptions::default()).await.unwrap();
        assert_eq!(result.page.map(|p| p.title), Some("News".to_string()));

        let missing = fetcher.fetch("300", &FetchOptions::default()).await.unwrap();
        assert!(missing.page.is_none());
    }

    #[tokio::test]
    async fn honors_cancelled_signal() {
        let fetcher = InMemoryPageFetcher::with_pages([Page::new("100", "Index")]);
        let token = CancellationToken::new();
        token.cancel();

        let result = fetcher
            .fetch("100", &FetchOptions::default().with_signal(token))
            .await;
        assert_eq!(result, Err(PageFetchError::Cancelled));
    }
}

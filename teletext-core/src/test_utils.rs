//! Test helpers
//!
//! Mock fetchers, a recording listener and page factories.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{InputError, PageFetchError};
use crate::traits::{FetchOptions, FetchResult, InMemoryPageFetcher, InputListener, PageFetcher};
use crate::types::{Page, PageLink, PageMeta};

// ===== MockPageFetcher =====

pub struct MockPageFetcher {
    pages: RwLock<HashMap<String, Page>>,
    /// If Some, every fetch fails with this error
    failure: RwLock<Option<PageFetchError>>,
    requests: RwLock<Vec<(String, FetchOptions)>>,
}

impl MockPageFetcher {
    pub fn with_pages(pages: impl IntoIterator<Item = Page>) -> Self {
        Self {
            pages: RwLock::new(pages.into_iter().map(|p| (p.id.clone(), p)).collect()),
            failure: RwLock::new(None),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert(&self, page: Page) {
        self.pages.write().await.insert(page.id.clone(), page);
    }

    /// Serve `page` for requests of `page_id`, whatever its own id
    pub async fn insert_as(&self, page_id: &str, page: Page) {
        self.pages.write().await.insert(page_id.to_string(), page);
    }

    pub async fn remove(&self, page_id: &str) {
        self.pages.write().await.remove(page_id);
    }

    pub async fn set_failure(&self, failure: Option<PageFetchError>) {
        *self.failure.write().await = failure;
    }

    /// Requested ids in call order
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.iter().map(|(id, _)| id.clone()).collect()
    }

    pub async fn last_session_id(&self) -> Option<String> {
        self.requests
            .read()
            .await
            .last()
            .and_then(|(_, options)| options.session_id.clone())
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, page_id: &str, options: &FetchOptions) -> Result<FetchResult, PageFetchError> {
        self.requests
            .write()
            .await
            .push((page_id.to_string(), options.clone()));

        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        Ok(match self.pages.read().await.get(page_id) {
            Some(page) => FetchResult::found(page.clone()),
            None => FetchResult::not_found(),
        })
    }
}

// ===== DelayedPageFetcher =====

/// Serves pages after a per-page delay
pub struct DelayedPageFetcher {
    inner: InMemoryPageFetcher,
    delays: HashMap<String, Duration>,
}

impl DelayedPageFetcher {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        Self {
            inner: InMemoryPageFetcher::with_pages(pages),
            delays: HashMap::new(),
        }
    }

    pub fn with_delay(mut self, page_id: &str, delay: Duration) -> Self {
        self.delays.insert(page_id.to_string(), delay);
        self
    }
}

#[async_trait]
impl PageFetcher for DelayedPageFetcher {
    async fn fetch(&self, page_id: &str, options: &FetchOptions) -> Result<FetchResult, PageFetchError> {
        if let Some(delay) = self.delays.get(page_id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.fetch(page_id, options).await
    }
}

// ===== RecordingListener =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerEvent {
    Buffer(String),
    Error(String),
    Submit(String),
}

/// Records every callback; clones share the same log
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<ListenerEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn buffers(&self) -> Vec<String> {
        self.filter(|event| match event {
            ListenerEvent::Buffer(buffer) => Some(buffer.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.filter(|event| match event {
            ListenerEvent::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn submissions(&self) -> Vec<String> {
        self.filter(|event| match event {
            ListenerEvent::Submit(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn filter(&self, pick: impl Fn(&ListenerEvent) -> Option<String>) -> Vec<String> {
        self.events.lock().unwrap().iter().filter_map(pick).collect()
    }

    fn push(&self, event: ListenerEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl InputListener for RecordingListener {
    fn on_buffer_change(&mut self, buffer: &str) {
        self.push(ListenerEvent::Buffer(buffer.to_string()));
    }

    fn on_error(&mut self, error: &InputError) {
        self.push(ListenerEvent::Error(error.to_string()));
    }

    fn on_text_submit(&mut self, text: &str) {
        self.push(ListenerEvent::Submit(text.to_string()));
    }
}

// ===== Page factories =====

/// `100` Main Index, triple-digit input
pub fn index_page() -> Page {
    plain_page("100", "Main Index")
}

pub fn plain_page(id: &str, title: &str) -> Page {
    Page::new(id, title).with_rows([format!("{title} content")])
}

/// Page with `inputOptions` and one numbered link per option
pub fn menu_page(id: &str, options: &[(&str, &str)]) -> Page {
    let meta = PageMeta::default().with_input_options(options.iter().map(|(label, _)| *label));
    options
        .iter()
        .fold(plain_page(id, "Menu"), |page, (label, target)| {
            page.with_link(PageLink::new(*label, *target))
        })
        .with_meta(meta)
}

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end flows: config -> router -> input handler -> renderer.

use std::sync::{Arc, Mutex};

use teletext_core::error::InputError;
use teletext_core::layout::{validate_output, HEIGHT};
use teletext_core::services::{NavigationHintService, PageRenderer};
use teletext_core::traits::FetchOptions;
use teletext_core::types::{Key, KeyPress};
use teletext_core::{
    InMemoryPageFetcher, InputContextManager, InputHandler, InputListener, InputMode,
    NavigationRouter, Page, TeletextConfig,
};

const PAGES_JSON: &str = r#"[
    {"id": "100", "title": "Main Index", "rows": ["Welcome"],
     "links": [{"label": "NEWS", "targetPage": "200", "color": "red"}]},
    {"id": "200", "title": "News", "rows": ["Headline one", "Headline two"]},
    {"id": "300", "title": "Quiz",
     "links": [{"label": "1", "targetPage": "301"}, {"label": "2", "targetPage": "302"}],
     "meta": {"inputOptions": ["1", "2"]}},
    {"id": "301", "title": "Correct!"},
    {"id": "510", "title": "Ask the Oracle"},
    {"id": "700", "title": "Settings", "rows": ["Theme"]}
]"#;

// ===== Helpers =====

#[derive(Clone, Default)]
struct Collector {
    errors: Arc<Mutex<Vec<String>>>,
    submitted: Arc<Mutex<Vec<String>>>,
}

impl InputListener for Collector {
    fn on_error(&mut self, error: &InputError) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn on_text_submit(&mut self, text: &str) {
        self.submitted.lock().unwrap().push(text.to_string());
    }
}

fn load_pages() -> Vec<Page> {
    serde_json::from_str(PAGES_JSON).expect("pages fixture is valid")
}

async fn start(config: &TeletextConfig) -> NavigationRouter {
    let fetcher = Arc::new(InMemoryPageFetcher::with_pages(load_pages()));
    let mut router = NavigationRouter::with_config(fetcher, config.router.clone());
    router
        .navigate_to_page(&config.router.home_page, &FetchOptions::default())
        .await
        .unwrap();
    router
}

async fn press(handler: &mut InputHandler, router: &mut NavigationRouter, keys: &str) {
    for ch in keys.chars() {
        let mut event = KeyPress::char(ch);
        handler.handle_key_press(router, &mut event).await;
    }
}

fn current(router: &NavigationRouter) -> String {
    router.current_page().map(|p| p.id.clone()).unwrap_or_default()
}

// ===== Flows =====

#[tokio::test]
async fn browse_select_and_go_back() {
    let config = TeletextConfig::default();
    let mut router = start(&config).await;
    let collector = Collector::default();
    let mut handler = InputHandler::new(collector.clone());

    press(&mut handler, &mut router, "300").await;
    assert_eq!(current(&router), "300");
    assert_eq!(handler.update_input_mode(&mut router), InputMode::Single);

    press(&mut handler, &mut router, "9").await;
    assert_eq!(current(&router), "300");

    press(&mut handler, &mut router, "1").await;
    assert_eq!(current(&router), "301");
    assert_eq!(router.history(), ["100", "300", "301"]);

    assert!(router.navigate_back().await);
    assert!(router.navigate_back().await);
    assert_eq!(current(&router), "100");
    assert!(!router.can_go_back());

    let errors = collector.errors.lock().unwrap().clone();
    assert_eq!(errors, vec!["Invalid option. Valid options: 1, 2"]);
}

#[tokio::test]
async fn free_text_page_flow() {
    let config = TeletextConfig::default();
    let mut router = start(&config).await;
    let collector = Collector::default();
    let mut handler = InputHandler::new(collector.clone());

    press(&mut handler, &mut router, "510").await;
    assert_eq!(handler.update_input_mode(&mut router), InputMode::Text);

    press(&mut handler, &mut router, "Hello 123").await;
    assert_eq!(handler.render_input_buffer(&router), "Hello 123_");

    let mut backspace = KeyPress::from(Key::Backspace);
    handler.handle_key_press(&mut router, &mut backspace).await;
    let mut enter = KeyPress::from(Key::Enter);
    handler.handle_key_press(&mut router, &mut enter).await;

    assert_eq!(*collector.submitted.lock().unwrap(), vec!["Hello 12"]);
    assert_eq!(current(&router), "510");

    let page = router.current_page().unwrap();
    let manager = InputContextManager::new(router.resolver());
    assert!(manager.validate_input("Hello 12", page).is_ok());
}

#[tokio::test]
async fn bad_page_number_recovers_to_index() {
    let config = TeletextConfig::default();
    let mut router = start(&config).await;
    let collector = Collector::default();
    let mut handler = InputHandler::new(collector.clone());

    press(&mut handler, &mut router, "999").await;
    assert_eq!(current(&router), "100");
    assert_eq!(handler.buffer(), "");
    assert_eq!(router.error().map(|e| e.code()), Some("PAGE_NOT_FOUND"));

    press(&mut handler, &mut router, "200").await;
    assert_eq!(current(&router), "200");
    assert!(router.error().is_none());
}

#[tokio::test]
async fn configured_renderer_produces_valid_grids() {
    let config = TeletextConfig::from_json(
        r#"{"router": {"maxHistorySize": 10}, "renderer": {"showClock": false}}"#,
    )
    .unwrap();
    let mut router = start(&config).await;
    let hints = NavigationHintService::new(router.resolver(), config.router.home_page.clone());
    let renderer = PageRenderer::new(hints, config.renderer.clone());

    let index = renderer.render_current(&router).unwrap();
    assert!(validate_output(&index).valid);
    assert_eq!(index[HEIGHT - 1].trim(), "NEWS");

    for id in ["200", "700"] {
        router
            .navigate_to_page(id, &FetchOptions::default())
            .await
            .unwrap();
        let grid = renderer.render_current(&router).unwrap();
        assert!(validate_output(&grid).valid, "page {id}");
    }

    let settings = renderer.render_current(&router).unwrap();
    assert!(settings[HEIGHT - 1].contains("SELECT TO CHANGE"));
}

#[tokio::test]
async fn shared_router_serializes_navigation() {
    let config = TeletextConfig::default();
    let router = start(&config).await.into_shared();

    let tasks: Vec<_> = ["200", "300", "700"]
        .into_iter()
        .map(|id| {
            let router = Arc::clone(&router);
            tokio::spawn(async move {
                router
                    .lock()
                    .await
                    .navigate_to_page(id, &FetchOptions::default())
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let router = router.lock().await;
    assert_eq!(router.history().len(), 4);
    assert_eq!(
        router.history()[router.history_index()],
        current(&router)
    );
    assert!(!router.is_loading());
}

//! Teletext Core Library
//!
//! Platform-independent logic for a 40x24 teletext page viewer:
//! - Layout engine (`layout`): pure text-to-grid functions
//! - Navigation router: page-id validation, history, fetch transitions
//! - Input handler and input context manager: mode-aware keystroke handling
//! - Navigation hints and page renderer: footer hints and final grid assembly
//!
//! Page content is supplied through the `PageFetcher` trait; frontends drive
//! the services with key events and draw the returned rows.

pub mod config;
pub mod error;
pub mod layout;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{RendererConfig, RouterConfig, TeletextConfig};
pub use error::{InputError, NavigationError, NavigationResult};
pub use services::{
    InputContextManager, InputHandler, NavigationHintService, NavigationRouter, PageRenderer,
    SharedRouter,
};
pub use traits::{FetchOptions, InMemoryPageFetcher, InputListener, InputModeResolver, PageFetcher};
pub use types::{InputMode, Page, PageLink, PageMeta};

//! Collaborator abstraction trait definition

mod input_listener;
mod input_mode_resolver;
mod page_fetcher;

pub use input_listener::{InputListener, NoopInputListener};
pub use input_mode_resolver::{DefaultInputModeResolver, InputModeResolver};
pub use page_fetcher::{FetchOptions, FetchResult, InMemoryPageFetcher, PageFetcher};

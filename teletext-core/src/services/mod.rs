//! Navigation, input and rendering services

mod input_context_service;
mod input_handler;
mod navigation_hints;
mod navigation_router;
mod page_renderer;

pub use input_context_service::InputContextManager;
pub use input_handler::InputHandler;
pub use navigation_hints::{NavigationHint, NavigationHintService, FALLBACK_HINT};
pub use navigation_router::{NavigationRouter, NavigationState, SharedRouter};
pub use page_renderer::PageRenderer;

//! Input handler callbacks

use crate::error::InputError;

/// Observer for the input handler
///
/// Frontends implement the callbacks they care about. Use `NoopInputListener`
/// when nothing needs to be observed.
pub trait InputListener: Send {
    /// The pending input buffer changed
    fn on_buffer_change(&mut self, _buffer: &str) {}

    /// A keystroke or submission was rejected
    fn on_error(&mut self, _error: &InputError) {}

    /// Free text was submitted with Enter
    fn on_text_submit(&mut self, _text: &str) {}
}

/// No-op listener
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInputListener;

impl InputListener for NoopInputListener {}

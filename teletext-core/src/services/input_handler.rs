//! Input handler
//!
//! Turns keystrokes into router navigation according to the current page's
//! input mode. Never fails: rejected input is reported through the
//! `InputListener` and the buffer is left in a defined state.

use crate::error::{InputError, InputValidationError};
use crate::traits::{FetchOptions, InputListener, NoopInputListener};
use crate::types::{InputMode, Key, KeyPress};

use super::{InputContextManager, NavigationRouter};

/// Keystroke handler with its own input buffer
///
/// Every operation that changes the buffer mirrors it into the router's copy.
pub struct InputHandler {
    buffer: String,
    listener: Box<dyn InputListener>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(NoopInputListener)
    }
}

impl InputHandler {
    #[must_use]
    pub fn new(listener: impl InputListener + 'static) -> Self {
        Self {
            buffer: String::new(),
            listener: Box::new(listener),
        }
    }

    /// Pending input
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn sync(&mut self, router: &mut NavigationRouter) {
        router.set_input_buffer(&self.buffer);
        self.listener.on_buffer_change(&self.buffer);
    }

    fn report(&mut self, error: InputError) {
        log::debug!("Input rejected: {error}");
        self.listener.on_error(&error);
    }

    /// Navigate to `target`; the buffer is cleared whether or not it succeeds
    async fn submit(&mut self, router: &mut NavigationRouter, target: &str) {
        let result = router.navigate_to_page(target, &FetchOptions::default()).await;
        self.buffer.clear();
        self.sync(router);
        if let Err(err) = result {
            self.report(err.into());
        }
    }

    /// Handle one digit key
    ///
    /// Non-digits and keys pressed before the first page loads are ignored.
    pub async fn handle_digit_input(&mut self, router: &mut NavigationRouter, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let Some(mode) = router.current_input_mode() else {
            log::debug!("Ignoring digit {digit}: no page loaded");
            return;
        };

        match mode {
            InputMode::Single => self.select_option(router, digit).await,
            InputMode::Double | InputMode::Triple => self.push_digit(router, digit, mode).await,
            InputMode::Text => self.handle_text_input(router, digit),
            InputMode::Disabled => log::debug!("Ignoring digit {digit}: input disabled"),
        }
    }

    async fn select_option(&mut self, router: &mut NavigationRouter, digit: char) {
        let Some(page) = router.current_page() else {
            return;
        };
        let key = digit.to_string();

        let options = page.selection_options();
        if !options.is_empty() && !options.contains(&key) {
            self.report(InputValidationError::InvalidOption { options }.into());
            return;
        }

        let target = page
            .link_target(&key)
            .map_or_else(|| format!("{}-{digit}", page.id), str::to_string);
        self.submit(router, &target).await;
    }

    async fn push_digit(&mut self, router: &mut NavigationRouter, digit: char, mode: InputMode) {
        let width = mode.expected_length();
        if self.buffer.len() >= width {
            return;
        }

        self.buffer.push(digit);
        self.sync(router);
        if self.buffer.len() < width {
            return;
        }

        let target = match (mode, router.current_page()) {
            (InputMode::Double, Some(page)) => page
                .link_target(&self.buffer)
                .map_or_else(|| self.buffer.clone(), str::to_string),
            _ => self.buffer.clone(),
        };
        self.submit(router, &target).await;
    }

    /// Append any character; validation happens on submit
    pub fn handle_text_input(&mut self, router: &mut NavigationRouter, ch: char) {
        self.buffer.push(ch);
        self.sync(router);
    }

    /// Submit the text buffer
    pub fn handle_enter_key(&mut self, router: &mut NavigationRouter) {
        if self.buffer.is_empty() {
            self.report(InputValidationError::Empty.into());
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        self.listener.on_text_submit(&text);
        self.sync(router);
    }

    /// Drop the last character, if any
    pub fn remove_last_digit(&mut self, router: &mut NavigationRouter) {
        if self.buffer.pop().is_some() {
            self.sync(router);
        }
    }

    pub fn clear_input_buffer(&mut self, router: &mut NavigationRouter) {
        self.buffer.clear();
        self.sync(router);
    }

    /// Buffer as shown on screen: `[20_]` for digit entry, `text_` for text
    pub fn render_input_buffer(&self, router: &NavigationRouter) -> String {
        match router.current_input_mode().unwrap_or_default() {
            InputMode::Single | InputMode::Disabled => String::new(),
            mode @ (InputMode::Double | InputMode::Triple) => {
                let missing = mode.expected_length().saturating_sub(self.buffer.len());
                format!("[{}{}]", self.buffer, "_".repeat(missing))
            }
            InputMode::Text => format!("{}_", self.buffer),
        }
    }

    /// Hint for the current page, empty before the first navigation
    pub fn show_input_hint(&self, router: &NavigationRouter) -> String {
        router.current_page().map_or_else(String::new, |page| {
            InputContextManager::new(router.resolver())
                .get_input_context(page)
                .hint
        })
    }

    /// Reset the buffer after the page changed underneath the handler
    pub fn update_input_mode(&mut self, router: &mut NavigationRouter) -> InputMode {
        if !self.buffer.is_empty() {
            log::debug!("Discarding pending input '{}' on mode change", self.buffer);
        }
        self.clear_input_buffer(router);
        router.current_input_mode().unwrap_or_default()
    }

    /// Route a key event; handled keys are marked with `prevent_default`
    pub async fn handle_key_press(&mut self, router: &mut NavigationRouter, event: &mut KeyPress) {
        let text_mode = router.current_input_mode() == Some(InputMode::Text);

        match event.key {
            Key::Char(ch) if text_mode && InputMode::Text.allowed_characters().matches(ch) => {
                event.prevent_default();
                self.handle_text_input(router, ch);
            }
            Key::Char(_) => {
                if let Some(digit) = event.digit() {
                    event.prevent_default();
                    self.handle_digit_input(router, digit).await;
                }
            }
            Key::Enter if text_mode => {
                event.prevent_default();
                self.handle_enter_key(router);
            }
            Key::Backspace => {
                event.prevent_default();
                self.remove_last_digit(router);
            }
            Key::Escape => {
                event.prevent_default();
                self.clear_input_buffer(router);
            }
            Key::Enter | Key::Other => {}
        }
    }
}

//! Input context manager
//!
//! Pure classification and validation over a page. Holds no per-page state;
//! contexts are recomputed on every call.

use std::sync::Arc;

use crate::error::InputValidationError;
use crate::layout::char_len;
use crate::traits::{DefaultInputModeResolver, InputModeResolver};
use crate::types::{InputContext, InputMode, Page, MIN_PAGE};

/// Digit count of a full page number
const PAGE_NUMBER_DIGITS: usize = 3;

/// Input context manager
#[derive(Clone)]
pub struct InputContextManager {
    resolver: Arc<dyn InputModeResolver>,
}

impl Default for InputContextManager {
    fn default() -> Self {
        Self::new(Arc::new(DefaultInputModeResolver))
    }
}

impl InputContextManager {
    /// Create a manager sharing `resolver` (usually `NavigationRouter::resolver()`)
    #[must_use]
    pub fn new(resolver: Arc<dyn InputModeResolver>) -> Self {
        Self { resolver }
    }

    pub fn detect_input_mode(&self, page: &Page) -> InputMode {
        self.resolver.resolve(page)
    }

    pub fn get_input_context(&self, page: &Page) -> InputContext {
        let mode = self.detect_input_mode(page);
        InputContext {
            mode,
            max_length: mode.max_length(),
            allowed_characters: mode.allowed_characters(),
            hint: Self::hint_for(mode, page),
            auto_submit: mode.auto_submit(),
        }
    }

    fn hint_for(mode: InputMode, page: &Page) -> String {
        match mode {
            InputMode::Single => {
                let options = page.selection_options();
                if options.is_empty() {
                    "PRESS A DIGIT".to_string()
                } else {
                    format!("PRESS {}", options.join("/"))
                }
            }
            InputMode::Double => "ENTER 2 DIGITS".to_string(),
            InputMode::Triple => "ENTER PAGE NUMBER".to_string(),
            InputMode::Text => "TYPE AND PRESS ENTER".to_string(),
            InputMode::Disabled => "NO INPUT ON THIS PAGE".to_string(),
        }
    }

    /// Check a complete entry against the page's mode
    pub fn validate_input(&self, input: &str, page: &Page) -> Result<(), InputValidationError> {
        let mode = self.detect_input_mode(page);
        if mode == InputMode::Disabled {
            return Err(InputValidationError::Disabled);
        }
        if input.is_empty() {
            return Err(InputValidationError::Empty);
        }
        let max = mode.max_length();
        if char_len(input) > max {
            return Err(InputValidationError::TooLong { max });
        }

        match mode.digit_width() {
            Some(1) => Self::validate_selection(input, page),
            Some(width) => Self::validate_digits(input, width),
            None => Self::validate_text(input),
        }
    }

    fn validate_selection(input: &str, page: &Page) -> Result<(), InputValidationError> {
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputValidationError::NotSingleDigit);
        }
        let options = page.selection_options();
        if options.is_empty() || options.iter().any(|option| option == input) {
            Ok(())
        } else {
            Err(InputValidationError::InvalidOption { options })
        }
    }

    fn validate_digits(input: &str, width: usize) -> Result<(), InputValidationError> {
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputValidationError::NotDigits { max: width });
        }
        if width == PAGE_NUMBER_DIGITS && input.len() == PAGE_NUMBER_DIGITS {
            let number: u16 = input.parse().map_err(|_| InputValidationError::OutOfRange)?;
            if number < MIN_PAGE {
                return Err(InputValidationError::OutOfRange);
            }
        }
        Ok(())
    }

    fn validate_text(input: &str) -> Result<(), InputValidationError> {
        if input.trim().is_empty() {
            return Err(InputValidationError::WhitespaceOnly);
        }
        Ok(())
    }

    /// Live keystroke filter
    pub fn is_character_allowed(&self, ch: char, page: &Page) -> bool {
        self.detect_input_mode(page).allowed_characters().matches(ch)
    }
}

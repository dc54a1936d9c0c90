//! Input mode type definitions

use serde::{Deserialize, Serialize};

/// Maximum length of a free-text entry
pub const TEXT_MAX_LENGTH: usize = 200;

/// How keystrokes are interpreted on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// One digit selects immediately
    Single,
    /// Two digits, auto-submitted
    Double,
    /// Three-digit page number, auto-submitted
    #[default]
    Triple,
    /// Free text submitted with Enter
    Text,
    /// No input accepted
    Disabled,
}

impl InputMode {
    /// Length the router expects before auto-navigating; 0 means variable or none
    #[must_use]
    pub fn expected_length(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Text | Self::Disabled => 0,
        }
    }

    /// Longest input the mode accepts
    #[must_use]
    pub fn max_length(self) -> usize {
        match self {
            Self::Text => TEXT_MAX_LENGTH,
            other => other.expected_length(),
        }
    }

    /// Fixed digit count for digit modes
    #[must_use]
    pub fn digit_width(self) -> Option<usize> {
        match self {
            Self::Single | Self::Double | Self::Triple => Some(self.expected_length()),
            Self::Text | Self::Disabled => None,
        }
    }

    #[must_use]
    pub fn auto_submit(self) -> bool {
        self.digit_width().is_some()
    }

    #[must_use]
    pub fn allowed_characters(self) -> CharacterClass {
        match self {
            Self::Single | Self::Double | Self::Triple => CharacterClass::Digits,
            Self::Text => CharacterClass::PrintableText,
            Self::Disabled => CharacterClass::Nothing,
        }
    }
}

/// Character filter applied to live keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterClass {
    /// `0-9`
    Digits,
    /// Printable ASCII plus common typographic punctuation
    PrintableText,
    /// Matches nothing
    Nothing,
}

impl CharacterClass {
    #[must_use]
    pub fn matches(self, ch: char) -> bool {
        match self {
            Self::Digits => ch.is_ascii_digit(),
            Self::PrintableText => {
                ch == ' ' || ch.is_ascii_graphic() || matches!(ch, '£' | '€' | '‘' | '’' | '“' | '”' | '…')
            }
            Self::Nothing => false,
        }
    }
}

/// Input rules for one page, recomputed on every page change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputContext {
    pub mode: InputMode,
    pub max_length: usize,
    pub allowed_characters: CharacterClass,
    pub hint: String,
    pub auto_submit: bool,
}

//! Page identifier parsing
//!
//! Three shapes are accepted:
//! - `NNN` (100-999)
//! - `NNN-k` sub-page (k: 1-99)
//! - `NNN-k-j` multi-part article (j: 2-99, part 1 is the sub-page itself)

use std::fmt;
use std::str::FromStr;

use crate::error::NavigationError;

/// Lowest addressable page
pub const MIN_PAGE: u16 = 100;
/// Highest addressable page
pub const MAX_PAGE: u16 = 999;

/// Parsed page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId {
    pub base: u16,
    pub sub_page: Option<u8>,
    pub part: Option<u8>,
}

impl PageId {
    /// Plain 3-digit page
    #[must_use]
    pub fn new(base: u16) -> Self {
        Self {
            base,
            sub_page: None,
            part: None,
        }
    }

    /// Numeric base (`202` for `"202-1-3"`)
    #[must_use]
    pub fn base_number(&self) -> u16 {
        self.base
    }

    /// `NNN-k` exactly (not a multi-part article)
    #[must_use]
    pub fn is_sub_page(&self) -> bool {
        self.sub_page.is_some() && self.part.is_none()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(sub_page) = self.sub_page {
            write!(f, "-{sub_page}")?;
        }
        if let Some(part) = self.part {
            write!(f, "-{part}")?;
        }
        Ok(())
    }
}

/// Parse a 1-2 digit component within `[min, 99]`
fn parse_component(part: &str, min: u8) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = part.parse().ok()?;
    (min..=99).contains(&value).then_some(value)
}

impl FromStr for PageId {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NavigationError::InvalidPageNumber(s.to_string());

        let mut parts = s.split('-');
        let base_str = parts.next().ok_or_else(invalid)?;
        if base_str.len() != 3 || !base_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let base: u16 = base_str.parse().map_err(|_| invalid())?;
        if !(MIN_PAGE..=MAX_PAGE).contains(&base) {
            return Err(invalid());
        }

        let sub_page = match parts.next() {
            Some(raw) => Some(parse_component(raw, 1).ok_or_else(invalid)?),
            None => None,
        };
        let part = match parts.next() {
            Some(raw) => Some(parse_component(raw, 2).ok_or_else(invalid)?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            base,
            sub_page,
            part,
        })
    }
}

/// Whether `id` is an addressable page id. Pure, no side effects.
#[must_use]
pub fn is_valid_page_number(id: &str) -> bool {
    id.parse::<PageId>().is_ok()
}

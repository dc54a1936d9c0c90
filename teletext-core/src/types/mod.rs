//! Type definition module

mod input;
mod key;
mod page;
mod page_id;

pub use input::{CharacterClass, InputContext, InputMode, TEXT_MAX_LENGTH};
pub use key::{Key, KeyPress};
pub use page::{LinkColor, Page, PageLink, PageMeta, Progress};
pub use page_id::{is_valid_page_number, PageId, MAX_PAGE, MIN_PAGE};

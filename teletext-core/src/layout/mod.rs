//! Layout engine
//!
//! Pure functions that turn arbitrary text into an exact `HEIGHT` x `WIDTH`
//! character grid. Nothing here fails: oversized or malformed input is
//! truncated or padded instead.
//!
//! ```text
//!   row 0      page number | centered title | clock     ┐ header
//!   row 1      (blank)                                  ┘
//!   row 2..22  content (CONTENT_HEIGHT rows, 1+ columns)
//!   row 22     (blank)                                  ┐ footer
//!   row 23     hints, centered                          ┘
//! ```
//!
//! Widths are counted in `char`s. Color markup and wide glyphs are ordinary
//! characters here; callers pass pre-stripped plain text.

mod columns;
mod grid;
mod page;
mod text;

pub use columns::{calculate_column_widths, flow_text_to_columns, merge_columns};
pub use grid::{
    blank_row, normalize_output, render_footer, render_header, validate_output, ValidationReport,
};
pub use page::{render_multi_column, render_single_column, LayoutOptions, PageContent};
pub use text::{char_len, pad_text, truncate_text, truncate_with, wrap_text, Align};

/// Grid width in characters
pub const WIDTH: usize = 40;
/// Grid height in rows
pub const HEIGHT: usize = 24;
/// Rows taken by the header
pub const HEADER_HEIGHT: usize = 2;
/// Rows taken by the footer
pub const FOOTER_HEIGHT: usize = 2;
/// Rows left for content
pub const CONTENT_HEIGHT: usize = HEIGHT - HEADER_HEIGHT - FOOTER_HEIGHT;

/// Default ellipsis for `truncate_text`
pub const DEFAULT_ELLIPSIS: &str = "...";
/// Default column count for multi-column pages
pub const DEFAULT_COLUMNS: usize = 2;
/// Default gutter between columns
pub const DEFAULT_GUTTER: usize = 2;

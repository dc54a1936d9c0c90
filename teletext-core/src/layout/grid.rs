//! Whole-grid helpers: header, footer, validation and normalization

use super::text::{char_len, pad_text, truncate_text, Align};
use super::{HEIGHT, WIDTH};

/// Field width of the page number and the clock in the header row
const HEADER_FIELD_WIDTH: usize = 8;
/// Separator between footer hints
const HINT_SEPARATOR: &str = "  ";

/// Result of `validate_output`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// A full-width row of spaces
#[must_use]
pub fn blank_row() -> String {
    " ".repeat(WIDTH)
}

/// Check row count and every row's width without touching the rows
#[must_use]
pub fn validate_output<S: AsRef<str>>(rows: &[S]) -> ValidationReport {
    let mut errors = Vec::new();

    if rows.len() != HEIGHT {
        errors.push(format!("Expected {HEIGHT} rows, got {}", rows.len()));
    }
    for (index, row) in rows.iter().enumerate() {
        let len = char_len(row.as_ref());
        if len != WIDTH {
            errors.push(format!("Row {index} has length {len}, expected {WIDTH}"));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Force any row sequence into a valid grid
///
/// Extra rows are dropped, each row is padded or cut to `WIDTH`, and blank
/// rows are appended when short.
#[must_use]
pub fn normalize_output<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    let report = validate_output(rows);
    if !report.valid {
        log::debug!("Normalizing page grid: {}", report.errors.join("; "));
    }

    let mut grid: Vec<String> = rows
        .iter()
        .take(HEIGHT)
        .map(|row| pad_text(row.as_ref(), WIDTH, Align::Left))
        .collect();
    grid.resize_with(HEIGHT, blank_row);
    grid
}

/// Two header rows: `page | title | clock`, then a blank separator
#[must_use]
pub fn render_header(page_number: &str, title: &str, timestamp: Option<&str>) -> Vec<String> {
    let title_width = WIDTH - 2 * HEADER_FIELD_WIDTH;
    let title = truncate_text(title, title_width);

    let row = format!(
        "{}{}{}",
        pad_text(page_number, HEADER_FIELD_WIDTH, Align::Left),
        pad_text(&title, title_width, Align::Center),
        pad_text(timestamp.unwrap_or_default(), HEADER_FIELD_WIDTH, Align::Right),
    );

    vec![row, blank_row()]
}

/// Two footer rows: a blank separator, then the hints centered
#[must_use]
pub fn render_footer<S: AsRef<str>>(hints: &[S]) -> Vec<String> {
    let joined = hints
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(HINT_SEPARATOR);
    let line = joined.chars().take(WIDTH).collect::<String>();

    vec![blank_row(), pad_text(&line, WIDTH, Align::Center)]
}

//! Multi-column flow

use super::text::{pad_text, wrap_text, Align};

/// Split `total_width` into `columns` widths separated by `gutter`
///
/// Floor division; the remainder goes entirely to the last column. Zero or one
/// column yields `[total_width]`.
#[must_use]
pub fn calculate_column_widths(total_width: usize, columns: usize, gutter: usize) -> Vec<usize> {
    if columns <= 1 {
        return vec![total_width];
    }

    let available = total_width.saturating_sub(gutter.saturating_mul(columns - 1));
    let base = available / columns;
    let mut widths = vec![base; columns];
    if let Some(last) = widths.last_mut() {
        *last += available % columns;
    }
    widths
}

/// Distribute lines over columns, top to bottom then left to right
///
/// Each column takes a contiguous chunk of `ceil(lines / columns)` lines and
/// re-wraps it to its own width.
#[must_use]
pub fn flow_text_to_columns<S: AsRef<str>>(lines: &[S], column_widths: &[usize]) -> Vec<Vec<String>> {
    match column_widths.len() {
        0 => Vec::new(),
        1 => vec![lines.iter().map(|line| line.as_ref().to_string()).collect()],
        count => {
            let per_column = lines.len().div_ceil(count);
            column_widths
                .iter()
                .enumerate()
                .map(|(index, &width)| {
                    lines
                        .iter()
                        .skip(index * per_column)
                        .take(per_column)
                        .flat_map(|line| rewrap(line.as_ref(), width))
                        .collect()
                })
                .collect()
        }
    }
}

fn rewrap(line: &str, width: usize) -> Vec<String> {
    if line.trim().is_empty() {
        vec![String::new()]
    } else {
        wrap_text(line, Some(width))
    }
}

/// Join columns side by side, row by row
///
/// Cells are left-aligned and cut to their column width; shorter columns are
/// filled with blanks.
#[must_use]
pub fn merge_columns(columns: &[Vec<String>], column_widths: &[usize], gutter: usize) -> Vec<String> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let separator = " ".repeat(gutter);

    (0..height)
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let width = column_widths.get(index).copied().unwrap_or(0);
                    let cell = column.get(row).map_or("", String::as_str);
                    pad_text(cell, width, Align::Left)
                })
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect()
}

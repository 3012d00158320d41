//! String utilities for cell layout. All widths count code points.

use super::column::Alignment;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncate a string to max length, adding ellipsis if needed.
///
/// The result of truncating is exactly `max_len` code points wide.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    format!("{}{}", truncated, ELLIPSIS)
}

/// A cell's visible text and the unstyled padding around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub left_pad: usize,
    pub text: String,
    pub right_pad: usize,
}

impl Cell {
    /// Plain rendering, without any styling.
    pub fn to_plain(&self) -> String {
        format!(
            "{}{}{}",
            " ".repeat(self.left_pad),
            self.text,
            " ".repeat(self.right_pad)
        )
    }
}

/// Fit text into a column of `width`: truncate if too long, otherwise pad.
/// Centered cells put the odd space on the right.
pub fn fit_cell(s: &str, width: usize, align: Alignment) -> Cell {
    let len = s.chars().count();
    if len > width {
        return Cell {
            left_pad: 0,
            text: truncate(s, width),
            right_pad: 0,
        };
    }

    let fill = width - len;
    let (left_pad, right_pad) = match align {
        Alignment::Left => (0, fill),
        Alignment::Center => (fill / 2, fill - fill / 2),
    };
    Cell {
        left_pad,
        text: s.to_string(),
        right_pad,
    }
}

//! Column definitions.

use crate::model::Details;
use crate::units::short_id;

/// Extracts a detail cell's text.
pub type ValueFn<'a> = Box<dyn Fn(&Details) -> String + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Style override for a detail column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Positive indicator (the "in use" mark)
    Positive,
}

/// A table column.
///
/// A `width` of 0 marks the flexible primary column, which must come first.
/// The primary column has no `value`; it shows names and tree rows instead.
pub struct Column<'a> {
    pub title: String,
    pub width: usize,
    pub align: Alignment,
    pub value: Option<ValueFn<'a>>,
    pub emphasis: Option<Emphasis>,
}

impl<'a> Column<'a> {
    /// The flexible, left-aligned primary column.
    pub fn primary(title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: 0,
            align: Alignment::Left,
            value: None,
            emphasis: None,
        }
    }

    /// A fixed-width, centered detail column.
    pub fn detail(title: &str, width: usize, value: impl Fn(&Details) -> String + 'a) -> Self {
        Self {
            title: title.to_string(),
            width,
            align: Alignment::Center,
            value: Some(Box::new(value)),
            emphasis: None,
        }
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }
}

impl std::fmt::Debug for Column<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("emphasis", &self.emphasis)
            .finish_non_exhaustive()
    }
}

/// Candidate columns for the image tree, in drop order (rightmost first).
///
/// `in_use_glyph` is printed in the `Used` column for images in use.
pub fn default_columns(in_use_glyph: &str) -> Vec<Column<'_>> {
    vec![
        Column::primary("Image"),
        Column::detail("ID", 12, |d| short_id(&d.id)),
        Column::detail("Disk usage", 10, |d| d.disk_usage.clone()),
        Column::detail("Content size", 12, |d| d.content_size.clone()),
        Column::detail("Used", 4, move |d| {
            if d.in_use {
                in_use_glyph.to_string()
            } else {
                " ".to_string()
            }
        })
        .with_emphasis(Emphasis::Positive),
    ]
}

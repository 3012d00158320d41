//! View model consumed by the tree renderer.
//!
//! Built once per invocation by [`crate::inventory::build_view`] and read
//! only afterwards. Sizes are already formatted; the renderer never does
//! arithmetic on them.

use serde::Serialize;

/// Summary metrics shown in the detail columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Details {
    /// Full identifier (shortened for display by the ID column)
    pub id: String,

    /// Human-readable disk usage
    pub disk_usage: String,

    /// Human-readable content size
    pub content_size: String,

    /// Whether anything currently uses this image or variant
    pub in_use: bool,
}

/// A platform-specific child of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Display label such as `linux/arm64/v8`
    pub platform: String,

    /// Whether the variant's content is present locally
    pub available: bool,

    pub details: Details,
}

/// A top-level row: one image with its aliases and variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Display aliases, printed one per line
    pub names: Vec<String>,

    pub details: Details,

    /// Variants in source order
    pub children: Vec<Variant>,
}

//! Terminal-independent table layout.
//!
//! This module provides:
//! - **Column**: column definitions and the default image columns
//! - **Measure**: minimum width of the primary (name) column
//! - **Plan**: which detail columns fit a terminal width
//! - **Text**: truncation and cell alignment by code point
//!
//! Everything here is pure. Styling and writing belong to the CLI renderer.

mod column;
mod measure;
mod plan;
pub mod text;

pub use column::{default_columns, Alignment, Column, Emphasis, ValueFn};
pub use measure::widest_primary_value;
pub use plan::{clamp_width, plan_columns, TableLayout};
pub use text::{fit_cell, truncate, Cell};

/// Spaces between two adjacent columns.
pub const COLUMN_SPACING: usize = 3;

/// Narrowest primary column allowed while any detail column is shown.
pub const MIN_PRIMARY_WIDTH: usize = 12;

/// Width used when the destination cannot report one.
pub const DEFAULT_WIDTH: usize = 80;

/// Smallest width the planner will work with.
pub const MIN_WIDTH: usize = 20;

/// Code points taken by a tree connector such as `├─ `.
pub const CONNECTOR_WIDTH: usize = 3;

//! # imgtree Core
//!
//! Core library for imgtree - a width-adaptive tree table for a two-level
//! image inventory (images and their per-platform variants).
//!
//! This crate provides the view model, the adapter from raw inventory
//! records, and the terminal-independent layout rules. Nothing here writes
//! to a terminal; the CLI crate owns styling and the output sink.
//!
//! ## Architecture
//!
//! - **model**: Entry / Variant / Details view model
//! - **inventory**: Raw inventory records and the view-model adapter
//! - **units**: Human-readable sizes and short identifiers
//! - **layout**: Column definitions, width measurement, column planning,
//!   truncation and padding

pub mod error;
pub mod inventory;
pub mod layout;
pub mod model;
pub mod units;

pub use error::{InventoryError, Result};
pub use model::{Details, Entry, Variant};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

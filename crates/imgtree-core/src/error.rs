//! Error types for imgtree core operations.
//!
//! Only loading and adapting inventory records can fail. Layout is a total
//! function over the view model and never produces an error; the CLI layer
//! maps these to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for imgtree operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for inventory loading.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Reading the inventory source failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The inventory document is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err.to_string())
    }
}

/// `serde_json` reports reader failures as its own errors; keep them as I/O.
impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            InventoryError::Io(err.to_string())
        } else {
            InventoryError::Parse(err.to_string())
        }
    }
}

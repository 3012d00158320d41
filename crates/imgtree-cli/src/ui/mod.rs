//! UI primitives for the imgtree CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode, width override)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Color policy and tree symbols
//! - **Sink**: Output destinations that report terminal capabilities
//! - **Render**: The image tree, errors and hints
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{print_tree, StdoutSink, TreeOptions, UiContext};
//!
//! let ctx = UiContext::from_env(flags);
//! let mut sink = StdoutSink::new();
//! print_tree(&mut sink, &entries, &TreeOptions::from(&ctx))?;
//! ```

mod context;
mod mode;
pub mod render;
mod sink;
pub mod theme;

// Re-export core types at module level
pub use context::{UiContext, UiFlags};
pub use sink::StdoutSink;

// Re-export commonly used render functions
pub use render::{print_error, print_tree, TreeOptions};

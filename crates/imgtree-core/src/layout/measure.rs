//! Width measurement for the primary column.

use super::CONNECTOR_WIDTH;
use crate::model::Entry;

/// Width needed to show the primary column without truncation: the title,
/// every name, and every connector plus platform label. Counts code points.
pub fn widest_primary_value(title: &str, entries: &[Entry]) -> usize {
    let mut width = title.chars().count();
    for entry in entries {
        for name in &entry.names {
            width = width.max(name.chars().count());
        }
        for variant in &entry.children {
            width = width.max(CONNECTOR_WIDTH + variant.platform.chars().count());
        }
    }
    width
}

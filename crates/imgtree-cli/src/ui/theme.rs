//! Theme definitions: color policy and symbols.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Connector for a variant that has a following sibling.
pub const BRANCH: SymbolPair = SymbolPair::new("|- ", "\u{251C}\u{2500} "); // ├─
/// Connector for the last variant of an image.
pub const LAST_BRANCH: SymbolPair = SymbolPair::new("`- ", "\u{2514}\u{2500} "); // └─
/// Mark for images and variants in use.
pub const IN_USE: SymbolPair = SymbolPair::new("*", "\u{2714}"); // ✔
/// Prefix for error messages.
pub const ERROR_BADGE: SymbolPair = SymbolPair::new("[ERR]", "[\u{2717}]"); // [✗]

/// Symbols used to draw the image tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeSymbols {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub in_use: &'static str,
}

impl TreeSymbols {
    pub fn new(unicode: bool) -> Self {
        Self {
            branch: BRANCH.get(unicode),
            last_branch: LAST_BRANCH.get(unicode),
            in_use: IN_USE.get(unicode),
        }
    }
}

/// A style applier. Without a style it returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paint {
    style: Option<Style>,
}

impl Paint {
    fn when(enabled: bool, style: Style) -> Self {
        Self {
            style: enabled.then_some(style),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self.style {
            Some(style) => text.style(style).to_string(),
            None => text.to_string(),
        }
    }

    /// Same paint, dimmed.
    pub fn faint(self) -> Self {
        Self {
            style: self.style.map(Style::dimmed),
        }
    }
}

/// Styles for each role in the tree table.
///
/// Built once per render from the sink's terminal capability. When the sink
/// is not a terminal every paint is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPolicy {
    pub header: Paint,
    pub name: Paint,
    pub detail: Paint,
    pub positive: Paint,
}

impl ColorPolicy {
    pub fn new(enabled: bool) -> Self {
        Self {
            header: Paint::when(enabled, Style::new().default_color().bold()),
            name: Paint::when(enabled, Style::new().blue().underline().bold()),
            detail: Paint::when(enabled, Style::new().default_color()),
            positive: Paint::when(enabled, Style::new().green()),
        }
    }

    /// Name style for variants whose content is not available.
    pub fn unavailable(&self) -> Paint {
        self.name.faint()
    }
}

//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
///
/// `color` is the user's permission to style output. Whether styling really
/// happens is decided again per render from the sink itself.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is allowed
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Width override (flag or config); `None` asks the terminal
    pub width: Option<usize>,
    /// Resolved output mode
    pub mode: OutputMode,
}

/// Flags and config values that feed [`UiContext::from_env`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub no_color: bool,
    pub ascii: bool,
    pub width: Option<usize>,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(flags: UiFlags) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        Self::resolve(flags, is_tty, term_is_dumb, no_color_env)
    }

    fn resolve(flags: UiFlags, is_tty: bool, term_is_dumb: bool, no_color_env: bool) -> Self {
        let mode = OutputMode::resolve(flags.json, is_tty, term_is_dumb);

        // Color: disabled if NO_COLOR env, --no-color flag, or anything but pretty
        let color = mode.is_pretty() && !flags.no_color && !no_color_env;

        Self {
            is_tty,
            color,
            unicode: !flags.ascii,
            width: flags.width,
            mode,
        }
    }
}

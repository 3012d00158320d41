//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (exclusive mode)
    /// 2. `TERM=dumb` forces plain
    /// 3. Pretty only when stdout is TTY
    /// 4. Default to plain for non-TTY
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            return Self::Json;
        }

        if term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        // --json always wins, even on a TTY
        let mode = OutputMode::resolve(true, true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(false, true, false);
        assert_eq!(mode, OutputMode::Pretty);
        assert!(mode.is_pretty());
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, false, false);
        assert_eq!(mode, OutputMode::Plain);
        assert!(!mode.is_json());
    }
}

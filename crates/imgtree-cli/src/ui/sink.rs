//! Output destinations that can describe their terminal.

use std::io::{self, IsTerminal, Write};

/// A writer that can say whether it is an interactive terminal and how wide
/// it is. The tree renderer writes only through this handle.
pub trait OutputSink: Write {
    /// Whether output lands on an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Terminal width in columns, if it can be determined.
    fn columns(&self) -> Option<usize>;
}

/// Standard output.
pub struct StdoutSink {
    out: io::StdoutLock<'static>,
    is_tty: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let is_tty = stdout.is_terminal();
        Self {
            out: stdout.lock(),
            is_tty,
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl OutputSink for StdoutSink {
    fn is_interactive(&self) -> bool {
        self.is_tty
    }

    fn columns(&self) -> Option<usize> {
        if !self.is_tty {
            return None;
        }
        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .filter(|w| *w > 0)
    }
}

/// In-memory sink with a chosen terminal profile.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub buf: Vec<u8>,
    pub tty: bool,
    pub width: Option<usize>,
}

#[cfg(test)]
impl MemorySink {
    pub fn terminal(width: usize) -> Self {
        Self {
            buf: Vec::new(),
            tty: true,
            width: Some(width),
        }
    }

    pub fn pipe() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

#[cfg(test)]
impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl OutputSink for MemorySink {
    fn is_interactive(&self) -> bool {
        self.tty
    }

    fn columns(&self) -> Option<usize> {
        self.width
    }
}

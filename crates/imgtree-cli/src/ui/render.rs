//! Rendering of the image tree and of CLI messages.

use std::io::{self, Write};

use imgtree_core::layout::{
    clamp_width, default_columns, fit_cell, plan_columns, widest_primary_value, Column, Emphasis,
    TableLayout, COLUMN_SPACING,
};
use imgtree_core::{Details, Entry};
use owo_colors::OwoColorize;

use super::context::UiContext;
use super::sink::OutputSink;
use super::theme::{ColorPolicy, Paint, TreeSymbols, ERROR_BADGE};

/// User preferences for one tree render.
#[derive(Debug, Clone, Copy)]
pub struct TreeOptions {
    /// Allow styling (still requires an interactive sink)
    pub color: bool,
    /// Use unicode connectors and marks
    pub unicode: bool,
    /// Width to use instead of asking the sink
    pub width: Option<usize>,
}

impl From<&UiContext> for TreeOptions {
    fn from(ctx: &UiContext) -> Self {
        Self {
            color: ctx.color,
            unicode: ctx.unicode,
            width: ctx.width,
        }
    }
}

/// Plan the table for `sink` and write the tree to it.
///
/// The sink is asked once whether it is a terminal; that single answer
/// decides both the color policy and whether its width is trusted.
pub fn print_tree<S: OutputSink + ?Sized>(
    sink: &mut S,
    entries: &[Entry],
    opts: &TreeOptions,
) -> io::Result<()> {
    let interactive = sink.is_interactive();
    let colors = ColorPolicy::new(interactive && opts.color);
    let reported = opts
        .width
        .or_else(|| if interactive { sink.columns() } else { None });
    let budget = clamp_width(reported);

    let symbols = TreeSymbols::new(opts.unicode);
    let columns = default_columns(symbols.in_use);
    let widest = columns
        .first()
        .map_or(0, |primary| widest_primary_value(&primary.title, entries));
    let layout = plan_columns(budget, columns, widest);

    TreeRenderer::new(&layout, &colors, &symbols).render(sink, entries)
}

/// Writes a planned table. Holds no state between rows.
pub struct TreeRenderer<'r, 'a> {
    layout: &'r TableLayout<'a>,
    colors: &'r ColorPolicy,
    symbols: &'r TreeSymbols,
}

impl<'r, 'a> TreeRenderer<'r, 'a> {
    pub fn new(
        layout: &'r TableLayout<'a>,
        colors: &'r ColorPolicy,
        symbols: &'r TreeSymbols,
    ) -> Self {
        Self {
            layout,
            colors,
            symbols,
        }
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W, entries: &[Entry]) -> io::Result<()> {
        let Some(primary) = self.layout.primary() else {
            return Ok(());
        };

        self.write_header(out)?;

        for (idx, entry) in entries.iter().enumerate() {
            if idx != 0 {
                writeln!(out)?;
            }
            self.write_names(out, primary, entry)?;
            self.write_details(out, &entry.details, self.colors.detail, false)?;
            self.write_children(out, primary, entry)?;
        }

        Ok(())
    }

    fn write_header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (idx, column) in self.layout.columns().iter().enumerate() {
            if idx > 0 {
                write_spacing(out)?;
            }
            write_cell(out, column, self.colors.header, &column.title)?;
        }
        writeln!(out)
    }

    /// Every name but the last ends its line; details follow the last one.
    fn write_names<W: Write + ?Sized>(
        &self,
        out: &mut W,
        primary: &Column<'_>,
        entry: &Entry,
    ) -> io::Result<()> {
        for (idx, name) in entry.names.iter().enumerate() {
            if idx != 0 {
                writeln!(out)?;
            }
            write_cell(out, primary, self.colors.name, name)?;
        }
        Ok(())
    }

    fn write_children<W: Write + ?Sized>(
        &self,
        out: &mut W,
        primary: &Column<'_>,
        entry: &Entry,
    ) -> io::Result<()> {
        let last = entry.children.len().saturating_sub(1);
        for (idx, variant) in entry.children.iter().enumerate() {
            let connector = if idx == last {
                self.symbols.last_branch
            } else {
                self.symbols.branch
            };
            let faint = !variant.available;
            let paint = if faint {
                self.colors.unavailable()
            } else {
                self.colors.name
            };

            let label = format!("{}{}", connector, variant.platform);
            write_cell(out, primary, paint, &label)?;
            self.write_details(out, &variant.details, paint, faint)?;
        }
        Ok(())
    }

    /// Detail cells for one row, then the line break.
    fn write_details<W: Write + ?Sized>(
        &self,
        out: &mut W,
        details: &Details,
        paint: Paint,
        faint: bool,
    ) -> io::Result<()> {
        for column in self.layout.details() {
            let Some(value) = column.value.as_ref() else {
                continue;
            };
            let cell_paint = match column.emphasis {
                Some(Emphasis::Positive) if faint => self.colors.positive.faint(),
                Some(Emphasis::Positive) => self.colors.positive,
                None => paint,
            };
            write_spacing(out)?;
            write_cell(out, column, cell_paint, &value(details))?;
        }
        writeln!(out)
    }
}

fn write_spacing<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write!(out, "{:width$}", "", width = COLUMN_SPACING)
}

/// Padding stays unstyled so underlines stop at the text.
fn write_cell<W: Write + ?Sized>(
    out: &mut W,
    column: &Column<'_>,
    paint: Paint,
    text: &str,
) -> io::Result<()> {
    let cell = fit_cell(text, column.width, column.align);
    write!(
        out,
        "{:left$}{}{:right$}",
        "",
        paint.apply(&cell.text),
        "",
        left = cell.left_pad,
        right = cell.right_pad
    )
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text"
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("Hint: {}", text)
    } else {
        format!("hint={}", text)
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        let badge = ERROR_BADGE.get(ctx.unicode);
        let badge = if ctx.color {
            badge.red().bold().to_string()
        } else {
            badge.to_string()
        };
        lines.push(format!("{} {}", badge, message));
    } else {
        lines.push(format!("error={}", message));
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;
    use crate::ui::sink::MemorySink;
    use imgtree_core::Variant;

    const PLAIN: TreeOptions = TreeOptions {
        color: true,
        unicode: true,
        width: None,
    };

    fn details(id: &str, disk: &str, content: &str, in_use: bool) -> Details {
        Details {
            id: id.to_string(),
            disk_usage: disk.to_string(),
            content_size: content.to_string(),
            in_use,
        }
    }

    fn alpine() -> Entry {
        Entry {
            names: vec!["alpine:latest".to_string()],
            details: details("sha256:abcd1234ef567890", "5.2MB", "7.5MB", true),
            children: vec![
                Variant {
                    platform: "linux/amd64".to_string(),
                    available: true,
                    details: details("sha256:1111aaaa2222bbbb", "3.1MB", "3MB", true),
                },
                Variant {
                    platform: "linux/arm64".to_string(),
                    available: false,
                    details: details("sha256:3333cccc4444dddd", "0B", "4.5MB", false),
                },
            ],
        }
    }

    fn render_to_string(sink: &mut MemorySink, entries: &[Entry], opts: &TreeOptions) -> String {
        print_tree(sink, entries, opts).unwrap();
        sink.text()
    }

    fn row_w(width: usize, primary: &str, id: &str, disk: &str, content: &str, used: &str) -> String {
        format!(
            "{:<width$}   {:^12}   {:^10}   {:^12}   {:^4}\n",
            primary,
            id,
            disk,
            content,
            used,
            width = width
        )
    }

    fn row(primary: &str, id: &str, disk: &str, content: &str, used: &str) -> String {
        row_w(14, primary, id, disk, content, used)
    }

    #[test]
    fn test_full_width_tree() {
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[alpine()], &PLAIN);

        let expected = [
            row("Image", "ID", "Disk usage", "Content size", "Used"),
            row("alpine:latest", "abcd1234ef56", "5.2MB", "7.5MB", "\u{2714}"),
            row("\u{251C}\u{2500} linux/amd64", "1111aaaa2222", "3.1MB", "3MB", "\u{2714}"),
            row("\u{2514}\u{2500} linux/arm64", "3333cccc4444", "0B", "4.5MB", " "),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_pipe_gets_no_escape_codes() {
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[alpine()], &PLAIN);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_terminal_gets_styles() {
        let mut sink = MemorySink::terminal(80);
        let out = render_to_string(&mut sink, &[alpine()], &PLAIN);
        let colors = ColorPolicy::new(true);

        assert!(out.contains(&colors.header.apply("Image")));
        assert!(out.contains(&colors.name.apply("alpine:latest")));
        assert!(out.contains(&colors.positive.apply("\u{2714}")));
        assert!(out.contains(&colors.name.apply("\u{251C}\u{2500} linux/amd64")));
        assert!(out.contains(&colors.unavailable().apply("\u{2514}\u{2500} linux/arm64")));
        // Faint carries into the unavailable variant's detail cells.
        assert!(out.contains(&colors.unavailable().apply("3333cccc4444")));
    }

    #[test]
    fn test_terminal_without_color_permission_is_plain() {
        let mut sink = MemorySink::terminal(80);
        let opts = TreeOptions {
            color: false,
            ..PLAIN
        };
        let out = render_to_string(&mut sink, &[alpine()], &opts);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_narrow_terminal_keeps_only_primary() {
        let mut sink = MemorySink::pipe();
        let opts = TreeOptions {
            width: Some(15),
            ..PLAIN
        };
        let out = render_to_string(&mut sink, &[alpine()], &opts);
        let expected = concat!(
            "Image         \n",
            "alpine:latest \n",
            "\u{251C}\u{2500} linux/amd64\n",
            "\u{2514}\u{2500} linux/arm64\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_terminal_width_is_used() {
        let mut sink = MemorySink::terminal(15);
        let opts = TreeOptions {
            color: false,
            ..PLAIN
        };
        let out = render_to_string(&mut sink, &[alpine()], &opts);
        assert_eq!(out.lines().next(), Some("Image         "));
    }

    #[test]
    fn test_pipe_width_is_ignored() {
        let mut sink = MemorySink {
            width: Some(15),
            ..MemorySink::pipe()
        };
        let out = render_to_string(&mut sink, &[alpine()], &PLAIN);
        assert!(out.lines().next().unwrap().contains("Used"));
    }

    #[test]
    fn test_long_name_is_truncated() {
        let entry = Entry {
            names: vec!["registry.example.com/team/service:v1.2.3".to_string()],
            details: details("sha256:abcd", "1MB", "1MB", false),
            children: Vec::new(),
        };
        let mut sink = MemorySink::pipe();
        // 70 - 50 for the detail columns leaves 20 for the name.
        let opts = TreeOptions {
            width: Some(70),
            ..PLAIN
        };
        let out = render_to_string(&mut sink, &[entry], &opts);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Image                   "));
        assert!(lines[1].starts_with("registry.example....   "));
        assert_eq!(lines[1].chars().take(20).collect::<String>(), "registry.example....");
    }

    #[test]
    fn test_entry_without_variants() {
        let entries = vec![
            Entry {
                children: Vec::new(),
                ..alpine()
            },
            Entry {
                names: vec!["busybox:1".to_string()],
                details: details("sha256:ffff", "2MB", "2MB", false),
                children: Vec::new(),
            },
        ];
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &entries, &PLAIN);

        // Without variants the widest primary value is "alpine:latest".
        let expected = [
            row_w(13, "Image", "ID", "Disk usage", "Content size", "Used"),
            row_w(13, "alpine:latest", "abcd1234ef56", "5.2MB", "7.5MB", "\u{2714}"),
            "\n".to_string(),
            row_w(13, "busybox:1", "ffff", "2MB", "2MB", " "),
        ]
        .concat();
        assert_eq!(out, expected);
        assert!(!out.contains('\u{2514}'));
    }

    #[test]
    fn test_multiple_names_share_detail_row() {
        let entry = Entry {
            names: vec!["alpine:latest".to_string(), "alpine:3".to_string()],
            children: Vec::new(),
            ..alpine()
        };
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[entry], &PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "alpine:latest");
        assert!(lines[2].starts_with("alpine:3        abcd1234ef56"));
    }

    #[test]
    fn test_empty_names_gives_details_only_line() {
        let entry = Entry {
            names: Vec::new(),
            children: Vec::new(),
            ..alpine()
        };
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[entry], &PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("   abcd1234ef56"));
    }

    #[test]
    fn test_ascii_symbols() {
        let opts = TreeOptions {
            unicode: false,
            ..PLAIN
        };
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[alpine()], &opts);
        assert!(out.contains("|- linux/amd64"));
        assert!(out.contains("`- linux/arm64"));
        assert!(out.contains("   *  \n"));
        assert!(out.is_ascii());
    }

    #[test]
    fn test_no_entries_prints_header_only() {
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &[], &PLAIN);
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let entries = vec![alpine(), alpine()];
        let mut first = MemorySink::terminal(100);
        let mut second = MemorySink::terminal(100);
        print_tree(&mut first, &entries, &PLAIN).unwrap();
        print_tree(&mut second, &entries, &PLAIN).unwrap();
        assert_eq!(first.buf, second.buf);
    }

    #[test]
    fn test_every_line_is_terminated_in_sink() {
        let entries = vec![alpine(), alpine()];
        let mut sink = MemorySink::pipe();
        let out = render_to_string(&mut sink, &entries, &PLAIN);
        // header + 2 * (name + 2 variants) + 1 separator
        assert_eq!(out.matches('\n').count(), 8);
        assert!(out.ends_with('\n'));
    }

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: mode.is_pretty(),
            color: false,
            unicode: false,
            width: None,
            mode,
        }
    }

    #[test]
    fn test_error_message_plain() {
        let e = error_message(&ctx(OutputMode::Plain), "Something went wrong", Some("Try again"));
        assert_eq!(e, "error=Something went wrong\nhint=Try again");
    }

    #[test]
    fn test_error_message_pretty() {
        let e = error_message(&ctx(OutputMode::Pretty), "Something went wrong", None);
        assert_eq!(e, "[ERR] Something went wrong");
    }

    #[test]
    fn test_hint_pretty() {
        let h = hint(&ctx(OutputMode::Pretty), "try this");
        assert_eq!(h, "Hint: try this");
    }
}

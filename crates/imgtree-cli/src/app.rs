//! Command execution: load the inventory, then print it.
//!
//! Everything that can fail (config, reading, parsing) happens before the
//! first byte of the table is written.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use imgtree_core::inventory::{build_view, read_records, ImageRecord};
use imgtree_core::InventoryError;

use crate::cli::{Cli, Commands};
use crate::config::{load_config, ImgtreeConfig};
use crate::errors::CliError;
use crate::ui::{print_tree, StdoutSink, TreeOptions, UiContext, UiFlags};

/// Resolve the config file named by `--config`, or the default location.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<ImgtreeConfig> {
    load_config(cli.config.as_deref().map(Path::new))
}

/// Build the UI context. Flags win over the config file.
pub fn ui_context(cli: &Cli, config: &ImgtreeConfig) -> UiContext {
    let ctx = UiContext::from_env(UiFlags {
        json: cli.tree.json,
        no_color: cli.tree.no_color || !config.ui.color,
        ascii: cli.tree.ascii || config.ui.ascii,
        width: cli.tree.width.or(config.ui.width),
    });
    tracing::debug!(
        mode = ?ctx.mode,
        tty = ctx.is_tty,
        color = ctx.color,
        unicode = ctx.unicode,
        width = ?ctx.width,
        "resolved ui context"
    );
    ctx
}

pub fn run(cli: &Cli, ctx: &UiContext) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "imgtree", &mut io::stdout());
            Ok(())
        }
        None => show_tree(cli, ctx),
    }
}

fn show_tree(cli: &Cli, ctx: &UiContext) -> anyhow::Result<()> {
    let records = load_records(cli.tree.input.as_deref())?;
    let entries = build_view(&records);
    tracing::debug!(images = entries.len(), "built view model");

    let mut sink = StdoutSink::new();
    if ctx.mode.is_json() {
        serde_json::to_writer_pretty(&mut sink, &entries)?;
        writeln!(sink)?;
    } else {
        print_tree(&mut sink, &entries, &TreeOptions::from(ctx))?;
    }
    sink.flush()?;
    Ok(())
}

/// Read inventory records from a file, or stdin for `None` / `-`.
fn load_records(input: Option<&str>) -> anyhow::Result<Vec<ImageRecord>> {
    match input {
        None | Some("-") => {
            tracing::debug!("reading inventory from stdin");
            read_records(io::stdin().lock()).map_err(|e| invalid_inventory("stdin", e))
        }
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    anyhow::Error::new(CliError::not_found(
                        format!("Inventory not found: {}", path),
                        "Check the --input path, or pipe the inventory on stdin.",
                    ))
                } else {
                    anyhow::anyhow!("Failed to open inventory {}: {}", path, e)
                }
            })?;
            tracing::debug!(path, "reading inventory file");
            read_records(BufReader::new(file)).map_err(|e| invalid_inventory(path, e))
        }
    }
}

fn invalid_inventory(source: &str, err: InventoryError) -> anyhow::Error {
    match err {
        InventoryError::Io(msg) => anyhow::anyhow!("Failed to read inventory {}: {}", source, msg),
        other => CliError::invalid_input(format!("Invalid inventory {}: {}", source, other)).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_records(Some("/nonexistent/inventory.json")).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("typed error");
        assert_eq!(cli_err.exit_code(), 3);
    }

    #[test]
    fn test_malformed_file_is_invalid_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_records(file.path().to_str()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("typed error");
        assert_eq!(cli_err.exit_code(), 4);
        assert!(cli_err.to_string().starts_with("Invalid inventory"));
    }

    #[test]
    fn test_reads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "sha256:1", "repo_tags": ["a:1"]}}]"#).unwrap();
        let records = load_records(file.path().to_str()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].repo_tags, vec!["a:1"]);
    }
}

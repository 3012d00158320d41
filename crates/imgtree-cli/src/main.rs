//! imgtree CLI - Show images and their platform variants as a tree
//!
//! Reads an already-fetched image inventory and prints it as a
//! width-adaptive table, with each image's platform variants drawn beneath it.

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match app::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let ctx = app::ui_context(&cli, &Default::default());
            print_error(&ctx, &format!("{}", e), None);
            std::process::exit(exit_codes::FAILURE);
        }
    };
    let ctx = app::ui_context(&cli, &config);

    if let Err(e) = app::run(&cli, &ctx) {
        exit_with_error(&ctx, &e);
    }
}

/// Install the stderr log subscriber. `IMGTREE_LOG` overrides `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("IMGTREE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_with_error(ctx: &UiContext, err: &anyhow::Error) -> ! {
    match err.downcast_ref::<CliError>() {
        Some(cli_err) => {
            print_error(ctx, &cli_err.to_string(), cli_err.hint());
            std::process::exit(cli_err.exit_code());
        }
        None => {
            print_error(ctx, &format!("{:#}", err), None);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

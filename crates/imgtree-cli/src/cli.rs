use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use imgtree_core::VERSION;

/// imgtree - Show images and their platform variants as a tree
#[derive(Parser)]
#[command(name = "imgtree")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub tree: TreeArgs,

    /// Path to the config file
    #[arg(long, global = true, env = "IMGTREE_CONFIG")]
    pub config: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for printing the tree (the default action)
#[derive(Args)]
pub struct TreeArgs {
    /// Inventory document (JSON); reads stdin when omitted or "-"
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Output the view model as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII connectors and marks
    #[arg(long)]
    pub ascii: bool,

    /// Table width in columns (overrides the terminal width)
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

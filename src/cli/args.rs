//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{Language, RenderStyle};

/// Composite document tree: documents, sections and paragraphs rendered with indentation
#[derive(Parser, Debug)]
#[command(name = "doctree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Additional config file, layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "DOCTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display the sample document
    Show(ShowArgs),

    /// Show node count and depth of the sample document
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Display flags; each overrides the corresponding setting.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Output style: indent, tree
    #[arg(short, long)]
    pub style: Option<RenderStyle>,

    /// Label language: ru, en
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Spaces added per nesting level (indent style only)
    #[arg(long)]
    pub indent_step: Option<usize>,

    /// Starting indentation of the root line
    #[arg(short, long, default_value_t = 0)]
    pub indent: usize,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for genomechat
#[derive(Parser, Debug)]
#[command(name = "genomechat")]
#[command(author, version, about = "Chat front-end for genomic variant effect predictions")]
#[command(long_about = r#"
genomechat validates genomic coordinates and sequences, then asks the prediction
service for variant, interval or sequence predictions. The REST API is tried
first; if it fails and an SDK bridge is configured, variant predictions fall
back to the SDK.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./genomechat.toml      Project-level config
3. ~/.config/genomechat/config.toml   Global config

The API key is read from GENOMECHAT_API_KEY or ALPHAGENOME_API_KEY, or set
inside chat mode with `setup <API_KEY>`.

Example:
  genomechat predict variant chr22:36201698:A>C
  genomechat predict interval chr22:35677410-36725986 --outputs rna_seq,dnase
  genomechat -o json metadata
  genomechat --chat
"#)]
pub struct Cli {
    /// Command to run once, e.g. `predict variant chr1:1000:A>T` (not required in chat mode)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The one-shot command text, if any words were given.
    pub fn command_text(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

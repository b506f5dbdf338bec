//! # lexnav CLI Module
//!
//! ## Available Commands
//!
//! - `browse`  - Interactive navigation REPL
//! - `suggest` - One-shot suggestion query for an entry + input text
//! - `show`    - Describe an entry: lineage, types, offered children
//! - `check`   - Load and validate a lexicon document

mod commands;

use clap::{Parser, Subcommand};
use lexnav_core::LexiconError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// lexnav - Interactive lexicon browser
///
/// Walks a hierarchical, typed dictionary of lemmas: type to filter,
/// cycle through candidates, commit to descend, back out, and keep
/// browsing while the tree changes underneath.
#[derive(Parser, Debug)]
#[command(name = "lexnav")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the lexicon document (JSON)
    #[arg(short = 'L', long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive navigation REPL
    Browse {
        /// Dotted entry path to start browsing from (defaults to the root)
        #[arg(short, long)]
        start: Option<String>,

        /// Disable cursor wrap-around
        #[arg(long)]
        no_cycle: bool,
    },

    /// One-shot suggestion query
    Suggest {
        /// Dotted entry path of the focus (defaults to the root)
        #[arg(short, long)]
        path: Option<String>,

        /// Filter text to apply
        #[arg(short, long, default_value = "")]
        input: String,
    },

    /// Describe an entry
    Show {
        /// Dotted entry path (defaults to the root)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Load and validate a lexicon document
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), LexiconError> {
    let config = crate::config::Config::load_or_default(cli.config.as_ref())?;
    let lexicon_path = cli
        .lexicon
        .clone()
        .or_else(|| config.lexicon.clone())
        .ok_or_else(|| {
            LexiconError::Io("no lexicon document given (use --lexicon or a config file)".into())
        })?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Browse { start, no_cycle }) => cmd_browse(
            &lexicon_path,
            start.as_deref(),
            !no_cycle && config.browse.cycle,
        ),
        Some(Commands::Suggest { path, input }) => {
            cmd_suggest(&lexicon_path, path.as_deref(), &input, json_mode)
        }
        Some(Commands::Show { path }) => cmd_show(&lexicon_path, path.as_deref(), json_mode),
        Some(Commands::Check) | None => cmd_check(&lexicon_path, json_mode),
    }
}

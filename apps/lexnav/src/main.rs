//! # lexnav - Interactive Lexicon Browser
//!
//! The main binary for the lexnav navigation core.
//!
//! This application provides:
//! - Interactive browse REPL (line-oriented)
//! - One-shot CLI queries (suggest, show, check)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  apps/lexnav (THE BINARY)                │
//! │                                                          │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │  │   CLI       │   │  Browse REPL │   │ Lexicon JSON │  │
//! │  │  (clap)     │   │  (stdin)     │   │  (serde)     │  │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬───────┘  │
//! │         │                 │                  │          │
//! │         └─────────────────┼──────────────────┘          │
//! │                           ▼                             │
//! │                   ┌───────────────┐                     │
//! │                   │  lexnav-core  │                     │
//! │                   │  (THE LOGIC)  │                     │
//! │                   └───────────────┘                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Browse a lexicon interactively
//! lexnav --lexicon words.json browse
//!
//! # One-shot queries
//! lexnav --lexicon words.json suggest --path grammar.noun --input pl
//! lexnav --lexicon words.json show --path grammar
//! lexnav --lexicon words.json check
//! ```

use clap::Parser;
use lexnav::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — LEXNAV_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LEXNAV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lexnav=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the lexnav startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗     ███████╗██╗  ██╗███╗   ██╗ █████╗ ██╗   ██╗
  ██║     ██╔════╝╚██╗██╔╝████╗  ██║██╔══██╗██║   ██║
  ██║     █████╗   ╚███╔╝ ██╔██╗ ██║███████║██║   ██║
  ██║     ██╔══╝   ██╔██╗ ██║╚██╗██║██╔══██║╚██╗ ██╔╝
  ███████╗███████╗██╔╝ ██╗██║ ╚████║██║  ██║ ╚████╔╝
  ╚══════╝╚══════╝╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝  ╚═══╝

  Lexicon Browser v{}

  Filter • Cycle • Descend
"#,
        env!("CARGO_PKG_VERSION")
    );
}

//! ShopCommand CLI - query inspection and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Run a natural-language query against the seeded catalog
//! shopcommand query "show me black hoodies under 2000"
//!
//! # Show the parsed intent as JSON without filtering
//! shopcommand intent "cheaper sneakers for women"
//!
//! # List the seeded catalog
//! shopcommand catalog
//! ```
//!
//! # Commands
//!
//! - `query` - Parse a query and print the matching products
//! - `intent` - Parse a query and print the structured intent
//! - `catalog` - List the seeded product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopcommand")]
#[command(author, version, about = "ShopCommand CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a natural-language query and print the matching products
    Query {
        /// The query text, e.g. "black hoodies under 2000"
        text: String,
    },
    /// Parse a natural-language query and print the structured intent
    Intent {
        /// The query text
        text: String,

        /// Print compact single-line JSON instead of pretty-printed
        #[arg(short, long)]
        compact: bool,
    },
    /// List the seeded product catalog
    Catalog,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Query { text } => commands::query::run(&text)?,
        Commands::Intent { text, compact } => commands::query::intent(&text, compact)?,
        Commands::Catalog => commands::catalog::list(),
    }
    Ok(())
}

//! Loomline CLI - session table migration and offline form checks.
//!
//! # Usage
//!
//! ```bash
//! # Create the storefront session table
//! loom-cli migrate sessions
//!
//! # Validate admin form records
//! loom-cli validate contact contact.json
//! loom-cli validate product - < product.json
//!
//! # Show the catalog taxonomy
//! loom-cli taxonomy
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `validate` - Check a JSON record against a form schema
//! - `taxonomy` - Print categories, types and materials

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::validate::FormKind;

mod commands;

#[derive(Parser)]
#[command(name = "loom-cli")]
#[command(author, version, about = "Loomline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Validate a JSON record against an admin form schema
    Validate {
        #[command(subcommand)]
        form: ValidateForm,
    },
    /// Print the catalog taxonomy
    Taxonomy,
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Create the storefront session table
    Sessions,
}

#[derive(Subcommand)]
enum ValidateForm {
    /// Validate a contact record
    Contact {
        /// JSON file, or `-` for stdin
        file: PathBuf,
    },
    /// Validate a product record, including its taxonomy selection
    Product {
        /// JSON file, or `-` for stdin
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Sessions => commands::migrate::sessions().await?,
        },
        Commands::Validate { form } => match form {
            ValidateForm::Contact { file } => commands::validate::run(FormKind::Contact, &file)?,
            ValidateForm::Product { file } => commands::validate::run(FormKind::Product, &file)?,
        },
        Commands::Taxonomy => commands::taxonomy::print(),
    }
    Ok(())
}

//! # TechCompare CLI Module
//!
//! This module implements the CLI interface for TechCompare.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `laptops` - Browse the laptop catalog with PPI
//! - `ppi` - Price-performance index of one laptop
//! - `parts` - List catalog parts
//! - `evaluate` - Evaluate a PC build
//! - `compare-builds` - Compare two PC builds
//! - `compare` - Compare up to four laptops
//! - `import` - Import laptop records
//! - `chat` - Ask the hardware consultant
//!
//! Every command runs against a fresh in-memory session seeded with the
//! built-in catalog.

mod commands;

use crate::config::AppConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use techcompare_core::{DisplayClass, LaptopFilter, TechCompareError, WeightClass};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// TechCompare - PC build compatibility and laptop scoring
#[derive(Parser, Debug)]
#[command(name = "techcompare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Laptop filter flags.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Case-insensitive substring of name or brand
    #[arg(short, long)]
    pub search: Option<String>,

    /// Brand to include (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Memory size in GB to include (repeatable)
    #[arg(long)]
    pub ram: Vec<u32>,

    /// Storage size in GB to include (repeatable)
    #[arg(long)]
    pub storage: Vec<u32>,

    /// Inclusive price ceiling
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Display class: small, medium, large (repeatable)
    #[arg(long)]
    pub display: Vec<DisplayClass>,

    /// CPU vendor substring such as Intel, AMD or Apple (repeatable)
    #[arg(long = "cpu")]
    pub cpu_brands: Vec<String>,

    /// Weight class: ultralight, balanced, heavy (repeatable)
    #[arg(long)]
    pub weight: Vec<WeightClass>,
}

impl FilterArgs {
    #[must_use]
    pub fn into_filter(self) -> LaptopFilter {
        let defaults = LaptopFilter::default();
        LaptopFilter {
            search: self.search.unwrap_or_default(),
            brands: self.brands,
            ram: self.ram,
            storage: self.storage,
            max_price: self.max_price.unwrap_or(defaults.max_price),
            display: self.display,
            cpu_brands: self.cpu_brands,
            weight: self.weight,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Browse laptops with their price-performance index
    Laptops {
        #[command(flatten)]
        filter: FilterArgs,

        /// Order by PPI, best first
        #[arg(long)]
        rank: bool,
    },

    /// Show the price-performance index of one laptop
    Ppi {
        /// Laptop ID
        id: String,
    },

    /// List catalog parts
    Parts {
        /// Only this category (CPU, Motherboard, Cooling, RAM, GPU, Storage, PSU, Case)
        #[arg(short = 't', long)]
        category: Option<String>,
    },

    /// Evaluate a PC build
    Evaluate {
        /// JSON file: {"name": "...", "parts": [Part, ...]}
        #[arg(short, long, conflicts_with = "parts")]
        file: Option<PathBuf>,

        /// Catalog part IDs (comma-separated)
        #[arg(long, required_unless_present = "file")]
        parts: Option<String>,
    },

    /// Compare two builds assembled from catalog part IDs
    CompareBuilds {
        /// Part IDs of build A (comma-separated)
        #[arg(long)]
        a: String,

        /// Part IDs of build B (comma-separated)
        #[arg(long)]
        b: String,
    },

    /// Compare up to four laptops
    Compare {
        /// Laptop IDs (comma-separated)
        #[arg(long)]
        ids: String,

        /// Ask the advisory collaborator for a verdict
        #[arg(long)]
        advise: bool,
    },

    /// Import laptop records into the catalog
    Import {
        /// JSON file holding an array of laptop records
        #[arg(short, long, conflicts_with = "urls")]
        file: Option<PathBuf>,

        /// Product page URL for collaborator extraction (repeatable)
        #[arg(long = "url", required_unless_present = "file")]
        urls: Vec<String>,
    },

    /// Ask the hardware consultant a question
    Chat {
        /// The question
        message: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli, config: AppConfig) -> Result<(), TechCompareError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(&config, host, port).await,
        Some(Commands::Laptops { filter, rank }) => {
            cmd_laptops(&filter.into_filter(), rank, json_mode)
        }
        Some(Commands::Ppi { id }) => cmd_ppi(&id, json_mode),
        Some(Commands::Parts { category }) => cmd_parts(category.as_deref(), json_mode),
        Some(Commands::Evaluate { file, parts }) => {
            cmd_evaluate(file.as_deref(), parts.as_deref(), json_mode)
        }
        Some(Commands::CompareBuilds { a, b }) => cmd_compare_builds(&a, &b, json_mode),
        Some(Commands::Compare { ids, advise }) => {
            cmd_compare(&config, &ids, advise, json_mode).await
        }
        Some(Commands::Import { file, urls }) => {
            cmd_import(&config, file.as_deref(), &urls, json_mode).await
        }
        Some(Commands::Chat { message }) => cmd_chat(&config, &message, json_mode).await,
        None => cmd_status(&config, json_mode),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_flags_build_a_filter() {
        let cli = Cli::try_parse_from([
            "techcompare",
            "laptops",
            "--brand",
            "ASUS",
            "--brand",
            "Lenovo",
            "--display",
            "medium",
            "--max-price",
            "90000",
            "--rank",
        ])
        .expect("parse");

        let Some(Commands::Laptops { filter, rank }) = cli.command else {
            panic!("expected laptops command");
        };
        let filter = filter.into_filter();
        assert!(rank);
        assert_eq!(filter.brands, vec!["ASUS", "Lenovo"]);
        assert_eq!(filter.display, vec![DisplayClass::Medium]);
        assert_eq!(filter.max_price, 90_000);
    }

    #[test]
    fn unknown_weight_class_is_rejected() {
        assert!(Cli::try_parse_from(["techcompare", "laptops", "--weight", "feather"]).is_err());
    }

    #[test]
    fn evaluate_needs_file_or_parts() {
        assert!(Cli::try_parse_from(["techcompare", "evaluate"]).is_err());
        assert!(Cli::try_parse_from(["techcompare", "evaluate", "--parts", "cpu-r5-7600"]).is_ok());
    }

    #[test]
    fn no_subcommand_means_status() {
        let cli = Cli::try_parse_from(["techcompare", "--json-mode"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.json_mode);
    }
}

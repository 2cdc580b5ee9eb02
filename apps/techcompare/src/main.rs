//! # TechCompare - Hardware Advisory Server
//!
//! The main binary: PC build compatibility checks, laptop price-performance
//! scoring and an optional advisory collaborator, over HTTP or the CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  apps/techcompare (THE BINARY)                │
//! │                                                               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐   │
//! │  │    CLI      │    │  HTTP API   │    │ Advisory Client  │   │
//! │  │   (clap)    │    │   (axum)    │    │    (reqwest)     │   │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘   │
//! │         │                  │                    │             │
//! │         └──────────────────┼────────────────────┘             │
//! │                            ▼                                  │
//! │                  ┌──────────────────┐                         │
//! │                  │ techcompare-core │                         │
//! │                  │   (THE LOGIC)    │                         │
//! │                  └──────────────────┘                         │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! techcompare server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! techcompare laptops --display medium --rank
//! techcompare evaluate --parts cpu-r5-7600,mobo-b650m-ds3h,psu-cv650
//! techcompare compare --ids 1,4,7 --advise
//! ```

use clap::Parser;
use techcompare::cli;
use techcompare::config::{AppConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let loaded = AppConfig::load(cli.config.as_deref());
    let format = loaded
        .as_ref()
        .map_or(LogFormat::Text, |config| config.logging.format);
    init_tracing(format, cli.verbose);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat, verbose: bool) {
    let default_filter = if verbose {
        "techcompare=debug,techcompare_core=debug,tower_http=debug"
    } else {
        "techcompare=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ╔╦╗╔═╗╔═╗╦ ╦╔═╗╔═╗╔╦╗╔═╗╔═╗╦═╗╔═╗
   ║ ║╣ ║  ╠═╣║  ║ ║║║║╠═╝╠═╣╠╦╝║╣
   ╩ ╚═╝╚═╝╩ ╩╚═╝╚═╝╩ ╩╩  ╩ ╩╩╚═╚═╝

  Hardware Advisory Server v{}

  Build checks and laptop scoring
"#,
        env!("CARGO_PKG_VERSION")
    );
}

//! CLI module for Itinera
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the Itinera server
//! - `pois` - List the bundled POI catalog
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! itinera serve
//!
//! # List oblast day-trip POIs as JSON
//! itinera pois --region lenobl --json
//! ```

pub mod completions;
pub mod output;
pub mod pois;
pub mod serve;

pub use completions::handle_completions;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Itinera - LLM-backed trip-itinerary service
#[derive(Parser, Debug)]
#[command(
    name = "itinera",
    version,
    about = "LLM-backed trip-itinerary service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Itinera server
    Serve(ServeArgs),
    /// List the POI catalog
    Pois(PoisArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "itinera.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "ITINERA_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "ITINERA_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ITINERA_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct PoisArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by region (spb, lenobl)
    #[arg(short, long)]
    pub region: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

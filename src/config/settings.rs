//! Configuration settings for hwcatalog
//!
//! Defines CLI arguments, subcommands and the runtime configuration
//! derived from them.

use crate::estimate::VendorClass;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the catalog document
pub const DEFAULT_CATALOG_PATH: &str = "data/hardware.json";

/// hwcatalog - Local LLM hardware catalog and estimates
#[derive(Parser, Debug, Clone)]
#[command(name = "hwcatalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive inference estimates from a hardware catalog")]
#[command(long_about = r#"
hwcatalog loads a hardware catalog (accelerator cards and unified-memory
systems) and prints derived, comparable estimates: tokens/sec at several
model sizes, the largest model that fits, and suitability notes.

All figures are coarse threshold heuristics, not benchmarks.

Examples:
  hwcatalog devices                         # Device list
  hwcatalog systems --format json           # System list as JSON
  hwcatalog compare rtx5090                 # One compare entry
  hwcatalog estimate --bandwidth 1008       # Ad-hoc estimate
  hwcatalog --catalog other.json metadata   # Alternate catalog
"#)]
pub struct CliArgs {
    /// Path to the catalog JSON document
    #[arg(
        short = 'c',
        long,
        env = "HWCATALOG_PATH",
        default_value = DEFAULT_CATALOG_PATH,
        value_name = "PATH"
    )]
    pub catalog: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List discrete cards and top-tier unified desktops
    #[command(name = "devices")]
    Devices,

    /// List unified-memory systems
    #[command(name = "systems")]
    Systems,

    /// Show the compare mapping, or one entry of it
    #[command(name = "compare")]
    Compare {
        /// Catalog model key
        key: Option<String>,
    },

    /// Show catalog metadata
    #[command(name = "metadata")]
    Metadata,

    /// Print a pass-through catalog section as authored
    #[command(name = "section")]
    Section {
        /// Section to print
        #[arg(value_enum)]
        section: CatalogSection,
    },

    /// Estimate from raw attributes without a catalog
    #[command(name = "estimate")]
    Estimate {
        /// Memory bandwidth in GB/s
        #[arg(short, long)]
        bandwidth: Option<u32>,
        /// Vendor class for the bandwidth estimate
        #[arg(long, value_enum, default_value = "nvidia")]
        vendor: VendorClass,
        /// Total (unified) memory in GB
        #[arg(short, long)]
        memory: Option<u32>,
        /// Dedicated VRAM in GB
        #[arg(long)]
        vram: Option<u32>,
    },
}

/// Pass-through catalog sections
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    /// GPU ranking lists
    Rankings,
    /// Use-case requirement tables
    UseCases,
    /// DIY build recommendations
    Diy,
    /// Prebuilt system recommendations
    Prebuilt,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog document path
    pub catalog_path: PathBuf,
    /// Output format
    pub output_format: OutputFormat,
    /// Log verbosity (0 = warn)
    pub verbosity: u8,
    /// JSON log lines
    pub log_json: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_format: OutputFormat::Text,
            verbosity: 0,
            log_json: false,
        }
    }
}

impl CatalogConfig {
    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        if args.catalog.as_os_str().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if args
            .catalog
            .extension()
            .is_some_and(|ext| !ext.eq_ignore_ascii_case("json"))
        {
            return Err(format!(
                "Catalog must be a .json document: {}",
                args.catalog.display()
            ));
        }

        Ok(Self {
            catalog_path: args.catalog.clone(),
            output_format: args.format,
            verbosity: args.verbose,
            log_json: args.log_json,
        })
    }

    /// Default log filter directive for the configured verbosity
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

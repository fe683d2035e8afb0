//! hwcatalog CLI - Local LLM Hardware Catalog
//!
//! Loads the hardware catalog and prints the derived collections.

use anyhow::Context;
use clap::Parser;
use hwcatalog::config::{CatalogConfig, CatalogSection, CliArgs, Commands, OutputFormat};
use hwcatalog::error::{CatalogError, Result};
use hwcatalog::estimate::{
    classify_suitability, estimate_max_model_size, estimate_max_model_size_from_vram,
    estimate_tg7b, scale_tg13b, VendorClass,
};
use hwcatalog::project::{CompareRecord, DeviceRecord, SystemRecord};
use hwcatalog::HardwareCatalog;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    let config = match CatalogConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", CatalogError::config(e));
            std::process::exit(2);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&args.command, &config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &CatalogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(command: &Commands, config: &CatalogConfig) -> anyhow::Result<()> {
    // Estimates need no catalog
    if let Commands::Estimate {
        bandwidth,
        vendor,
        memory,
        vram,
    } = command
    {
        return Ok(cmd_estimate(*bandwidth, *vendor, *memory, *vram, config.output_format)?);
    }

    let catalog = HardwareCatalog::from_path(&config.catalog_path);
    catalog
        .load()
        .await
        .with_context(|| format!("cannot load catalog {}", config.catalog_path.display()))?;

    let printed = match command {
        Commands::Devices => print_devices(&catalog.devices(), config.output_format),
        Commands::Systems => print_systems(&catalog.systems(), config.output_format),
        Commands::Compare { key } => cmd_compare(&catalog, key.as_deref(), config.output_format),
        Commands::Metadata => cmd_metadata(&catalog, config.output_format),
        Commands::Section { section } => {
            let value = match section {
                CatalogSection::Rankings => catalog.gpu_rankings(),
                CatalogSection::UseCases => catalog.use_cases(),
                CatalogSection::Diy => catalog.diy_recommendations(),
                CatalogSection::Prebuilt => catalog.prebuilt_systems(),
            };
            print_json(&value)
        }
        Commands::Estimate { .. } => Ok(()),
    };
    Ok(printed?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fmt_opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn fmt_price(price: Option<u32>) -> String {
    price.map(|p| format!("${}", p)).unwrap_or_else(|| "-".to_string())
}

fn print_devices(devices: &[DeviceRecord], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(devices);
    }

    println!(
        "{:<24} {:<7} {:>6} {:>7} {:>6} {:>6} {:>7}  {}",
        "NAME", "MFR", "VRAM", "BW", "7B", "70B", "PRICE", "BEST FOR"
    );
    for d in devices {
        println!(
            "{:<24} {:<7} {:>4}GB {:>7} {:>6} {:>6} {:>7}  {}",
            d.name,
            d.manufacturer.to_string(),
            d.vram_gb,
            d.bandwidth_gbs,
            d.tg7b,
            fmt_opt(d.tg70b),
            fmt_price(d.price),
            d.best_for
        );
    }
    Ok(())
}

fn print_systems(systems: &[SystemRecord], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(systems);
    }

    println!(
        "{:<40} {:>6} {:>5} {:>6} {:>5} {:>5} {:>5}  {}",
        "NAME", "MEM", "BW", "MAX", "7B", "13B", "70B", "PRICE"
    );
    for s in systems {
        println!(
            "{:<40} {:>4}GB {:>5} {:>5}B {:>5} {:>5} {:>5}  {} - {}",
            s.name,
            s.memory_gb,
            s.bandwidth_gbs,
            s.max_model_b,
            s.tg7b,
            s.tg13b,
            fmt_opt(s.tg70b),
            fmt_price(s.min_price),
            fmt_price(s.max_price)
        );
    }
    Ok(())
}

fn print_compare_record(key: &str, r: &CompareRecord) {
    println!("[{}] {} ({})", key, r.name, r.subtitle);
    println!(
        "    {} | {}GB @ {}GB/s | cores {}/{} | {}",
        r.manufacturer,
        r.memory_gb,
        r.bandwidth_gbs,
        fmt_opt(r.cpu_cores),
        fmt_opt(r.gpu_cores),
        fmt_price(r.price)
    );
    println!(
        "    tok/s 7B {} | 13B {} | 70B {} | 120B {}",
        fmt_opt(r.tg7b),
        fmt_opt(r.tg13b),
        fmt_opt(r.tg70b),
        fmt_opt(r.tg120b)
    );
    println!("    {}", r.framework);
    if !r.notes.is_empty() {
        println!("    {}", r.notes);
    }
}

fn cmd_compare(catalog: &HardwareCatalog, key: Option<&str>, format: OutputFormat) -> Result<()> {
    let compare = catalog.compare();

    match key {
        Some(key) => {
            let record = compare
                .get(key)
                .ok_or_else(|| CatalogError::config(format!("No compare entry for '{}'", key)))?;
            match format {
                OutputFormat::Json => print_json(record),
                OutputFormat::Text => {
                    print_compare_record(key, record);
                    Ok(())
                }
            }
        }
        None => match format {
            OutputFormat::Json => print_json(&compare),
            OutputFormat::Text => {
                for (key, record) in compare.iter() {
                    print_compare_record(key, record);
                }
                Ok(())
            }
        },
    }
}

fn cmd_metadata(catalog: &HardwareCatalog, format: OutputFormat) -> Result<()> {
    let metadata = catalog.metadata();
    if format == OutputFormat::Json {
        return print_json(&metadata);
    }

    println!(
        "Last updated: {}",
        metadata
            .last_updated_date()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .or(metadata.last_updated.clone())
            .unwrap_or_else(|| "unknown".to_string())
    );
    if let Some(version) = &metadata.version {
        println!("Version:      {}", version);
    }
    for source in &metadata.sources {
        println!("Source:       {}", source);
    }
    println!("Devices:      {}", catalog.devices().len());
    println!("Systems:      {}", catalog.systems().len());
    println!("Compare:      {}", catalog.compare().len());
    Ok(())
}

#[derive(Serialize)]
struct Estimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    tg7b: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tg13b: Option<u32>,
    #[serde(rename = "maxModel", skip_serializing_if = "Option::is_none")]
    max_model_b: Option<u32>,
    #[serde(rename = "maxModelFromVram", skip_serializing_if = "Option::is_none")]
    max_model_from_vram_b: Option<u32>,
    #[serde(rename = "bestFor", skip_serializing_if = "Option::is_none")]
    best_for: Option<&'static str>,
}

fn cmd_estimate(
    bandwidth: Option<u32>,
    vendor: VendorClass,
    memory: Option<u32>,
    vram: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    if bandwidth.is_none() && memory.is_none() && vram.is_none() {
        return Err(CatalogError::config(
            "estimate needs at least one of --bandwidth, --memory, --vram",
        ));
    }

    let tg7b = bandwidth.map(|bw| estimate_tg7b(bw, vendor));
    let estimate = Estimate {
        tg7b,
        tg13b: tg7b.map(|t| scale_tg13b(t, vendor)),
        max_model_b: memory.map(estimate_max_model_size),
        max_model_from_vram_b: vram.map(estimate_max_model_size_from_vram),
        best_for: vram
            .zip(bandwidth)
            .map(|(v, bw)| classify_suitability(v, bw)),
    };

    if format == OutputFormat::Json {
        return print_json(&estimate);
    }

    if let (Some(tg7b), Some(tg13b)) = (estimate.tg7b, estimate.tg13b) {
        println!("7B:  ~{} tok/s", tg7b);
        println!("13B: ~{} tok/s", tg13b);
    }
    if let Some(size) = estimate.max_model_b {
        println!("Max model (unified memory): {}B", size);
    }
    if let Some(size) = estimate.max_model_from_vram_b {
        println!("Max model (dedicated VRAM): {}B", size);
    }
    if let Some(text) = estimate.best_for {
        println!("Best for: {}", text);
    }
    Ok(())
}

// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use data_digest::utils::logging::{format_error, format_info, format_success, format_warning};
use data_digest::{
    CaloriePipeline, Config, CountryRegionPipeline, HealthCheck, HealthReport, HealthStatus,
    ReleaseYearPipeline, Validator,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "data_digest")]
#[command(version = "0.1.0")]
#[command(about = "Summary report pipelines for CSV, spreadsheet, and JSON data files", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the release year column of the movies CSV
    Csv,

    /// Find the company with the highest total calories in the menu spreadsheet
    Excel,

    /// Pair countries with their regions from the countries JSON
    Json,

    /// Run all three pipelines in sequence
    All,

    /// Check that the configured input files exist and are non-empty
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    data_digest::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Data Digest report pipelines");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        match Config::load(Some(cli.config.as_path())) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                warn!("Falling back to built-in defaults");
                Config::default_config()
            }
        }
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Csv => cmd_csv(&config),
        Commands::Excel => cmd_excel(&config),
        Commands::Json => cmd_json(&config),
        Commands::All => cmd_all(&config),
        Commands::Verify => cmd_verify(&config),
    }

    Ok(())
}

fn cmd_csv(config: &Config) {
    info!("Starting CSV processing");
    ReleaseYearPipeline::new(config).run();
    info!("CSV processing complete");
}

fn cmd_excel(config: &Config) {
    info!("Starting Excel processing");
    CaloriePipeline::new(config).run();
    info!("Excel processing complete");
}

fn cmd_json(config: &Config) {
    info!("Starting JSON processing");
    CountryRegionPipeline::new(config).run();
    info!("JSON processing complete");
}

fn cmd_all(config: &Config) {
    cmd_csv(config);
    cmd_excel(config);
    cmd_json(config);
}

fn cmd_verify(config: &Config) {
    println!(
        "{}",
        format_info(&format!(
            "Checking inputs under {}",
            config.paths.input_dir.display()
        ))
    );

    let mut checks = Vec::new();
    for path in config.input_paths() {
        let start = Instant::now();
        let component = path.display().to_string();

        let check = match Validator::validate_file_path(&path)
            .and_then(|_| Validator::validate_extension(&path, &["csv", "xlsx", "json"]))
        {
            Err(err) => HealthCheck::unhealthy(&component, err.to_string(), start.elapsed()),
            Ok(()) => match std::fs::metadata(&path) {
                Ok(meta) if meta.len() == 0 => {
                    HealthCheck::degraded(&component, "file is empty".to_string(), start.elapsed())
                }
                Ok(_) => HealthCheck::healthy(&component, start.elapsed()),
                Err(err) => HealthCheck::unhealthy(&component, err.to_string(), start.elapsed()),
            },
        };

        checks.push(check);
    }

    let report = HealthReport::new(checks, env!("CARGO_PKG_VERSION").to_string());
    println!("{}", report.format());

    match report.overall_status {
        HealthStatus::Healthy => println!("{}", format_success("All inputs ready")),
        HealthStatus::Degraded => println!("{}", format_warning("Some inputs are empty")),
        HealthStatus::Unhealthy => {
            println!("{}", format_error("Some inputs are missing or unreadable"))
        }
    }
}

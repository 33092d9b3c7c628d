use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use workbench::workshop;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("workbench")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("workbench.log");

    // Setup env_logger with file output so stdout carries only program output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        // config level applies unless RUST_LOG overrides it
        if let Some(level) = level {
            builder.parse_filters(level);
        }
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Run) => run_crew(config),
        Some(Commands::Tools) => list_tools(config),
    }
}

fn run_crew(config: &Config) -> Result<()> {
    info!("Wiring the crew and putting it to work");

    if config.debug {
        println!("{}", "Debug mode enabled".yellow());
    }

    let catalog = workshop::standard_catalog().context("Failed to build tool catalog")?;

    let mut stdout = io::stdout().lock();
    workshop::run_once(catalog, &mut stdout).context("Failed to put the crew to work")?;

    Ok(())
}

fn list_tools(config: &Config) -> Result<()> {
    info!("Listing registered tools");

    let catalog = workshop::standard_catalog().context("Failed to build tool catalog")?;

    println!("{}", "Registered tools:".cyan());
    for tool in catalog.iter() {
        println!("  {} - {}", tool.name().green(), tool.description());
    }

    let _ = config;
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with the configured level
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}

//! CLI entry point for enumgen-codegen

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use enumgen_codegen::codegen::output_path;
use enumgen_codegen::config::GeneratorConfig;
use enumgen_codegen::source::load_config;
use enumgen_codegen::GenerationReport;

#[derive(Parser)]
#[command(name = "enumgen-codegen")]
#[command(about = "Generate enum source files from SQLite columns and resource folders")]
#[command(version)]
struct Cli {
    /// Path to settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project root (overrides config)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Path to the JSON enum config (overrides config)
    #[arg(short, long)]
    enum_config: Option<PathBuf>,

    /// Path to the SQLite database (overrides config)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the enum template (overrides config)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Extension of generated files (overrides config)
    #[arg(long)]
    output_extension: Option<String>,

    /// Dry run - render enums without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all enums (resources and database)
    Generate,
    /// Generate only resource folder enums
    Resources,
    /// Generate only database enums
    Database,
    /// Inspect the enum config (show parsed entries for debugging)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(root) = cli.root {
        config.project_root = root;
    }
    if let Some(enum_config) = cli.enum_config {
        config.enum_config_file = enum_config;
    }
    if let Some(database) = cli.database {
        config.database_file = database;
    }
    if let Some(template) = cli.template {
        config.template_file = template;
    }
    if let Some(ext) = cli.output_extension {
        config.output_extension = ext.trim_start_matches('.').to_string();
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    // Apply command-specific settings
    match &cli.command {
        Some(Commands::Resources) => {
            config.generate_database = false;
        }
        Some(Commands::Database) => {
            config.generate_resources = false;
        }
        Some(Commands::Inspect) => {
            return inspect_config(&config);
        }
        _ => {}
    }

    // Validate configuration
    config.validate()?;

    info!("Generating enums from: {:?}", config.enum_config_path());
    let report = enumgen_codegen::generate(&config)?;
    print_report(&report);

    if !report.is_clean() {
        bail!(
            "{} enum(s) failed and {} config entr(ies) were rejected",
            report.failed.len(),
            report.rejected.len()
        );
    }

    info!("Enum generation completed successfully");
    Ok(())
}

fn print_report(report: &GenerationReport) {
    for generated in &report.succeeded {
        let verb = if generated.output.written {
            "Wrote"
        } else {
            "Would write"
        };
        println!(
            "{} {} ({} members)",
            verb,
            generated.output.path.display(),
            generated.output.member_count
        );
    }
    for failed in &report.failed {
        println!("Failed {}: {}", failed.entry.enum_name(), failed.error);
    }
    for rejected in &report.rejected {
        println!(
            "Rejected {}[{}]: {}",
            rejected.section, rejected.index, rejected.error
        );
    }
}

fn inspect_config(config: &GeneratorConfig) -> Result<()> {
    let loaded = load_config(&config.enum_config_path())?;

    println!("Parsed {} database entries:\n", loaded.database.len());
    for entry in &loaded.database {
        println!("{}", entry);
        println!(
            "  -> {} ({})\n",
            output_path(
                &config.destination_dir(&entry.destination_path),
                &entry.enum_name,
                &config.output_extension
            )
            .display(),
            entry.resolved_kind()
        );
    }

    println!("Parsed {} resource entries:\n", loaded.resources.len());
    for entry in &loaded.resources {
        println!("{}", entry);
        println!(
            "  {} -> {}\n",
            config.source_dir(&entry.folder_path).display(),
            output_path(
                &config.destination_dir(&entry.destination_path),
                &entry.enum_name,
                &config.output_extension
            )
            .display()
        );
    }

    if !loaded.rejected.is_empty() {
        println!("Rejected {} entries:\n", loaded.rejected.len());
        for rejected in &loaded.rejected {
            println!(
                "  {}[{}]: {}\n  {}\n",
                rejected.section, rejected.index, rejected.error, rejected.raw
            );
        }
    }

    Ok(())
}

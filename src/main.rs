//! CLI entry point for entity-codegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use entity_codegen::config::GenConfig;

#[derive(Parser)]
#[command(name = "entity-codegen")]
#[command(about = "Generate entity model classes from persisted database table metadata")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding table definition files (overrides config)
    #[arg(short, long)]
    definitions: Option<PathBuf>,

    /// Path to the entity-model template (overrides config)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Solution directory to generate into (overrides config)
    #[arg(short, long)]
    project_dir: Option<PathBuf>,

    /// Dry run - resolve everything without writing the output file
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the entity model for a table definition
    Generate {
        /// Table definition id
        table_id: String,
    },
    /// Inspect a table definition (show columns for debugging)
    Inspect {
        /// Table definition id
        table_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        GenConfig::from_file(config_path)?
    } else {
        GenConfig::default()
    };

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
    if let Some(definitions) = cli.definitions {
        config.definitions_dir = definitions;
    }
    if let Some(template) = cli.template {
        config.template_file = template;
    }
    if let Some(project_dir) = cli.project_dir {
        config.project_dir = project_dir;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    match &cli.command {
        Commands::Inspect { table_id } => {
            return inspect_table(&config, table_id);
        }
        Commands::Generate { table_id } => {
            config.validate()?;

            info!("Generating entity for table '{table_id}'");
            let generated = entity_codegen::generate(&config, table_id)?;

            if config.dry_run {
                println!("Dry run mode - would generate:");
                println!("  {}", generated.path.display());
            } else {
                info!("Entity generation completed successfully");
            }
        }
    }

    Ok(())
}

fn inspect_table(config: &GenConfig, table_id: &str) -> Result<()> {
    use entity_codegen::{TableStore, TomlStore};

    let store = TomlStore::new(&config.definitions_dir);
    let table = store.find_table(table_id)?;
    let columns = store.find_columns(table_id)?;

    println!("Table: {} ({})", table.table_name, table.namespace);
    if !table.comment.is_empty() {
        println!("  Comment: {}", table.comment);
    }
    if !table.module_code.is_empty() {
        println!("  Module: {} (alias {})", table.module_code, table.module_name);
    }
    if let Some(detail) = &table.detail_table_name {
        println!("  Detail table: {detail}");
    }
    println!("  Columns:");
    for col in &columns {
        let required = if col.is_required { "NOT NULL" } else { "NULL" };
        let key = if col.is_key { " KEY" } else { "" };
        println!(
            "    - {} {} {}{} (sort {})",
            col.column_name, col.column_type, required, key, col.sort
        );
        if col.max_length > 0 {
            println!("      max length: {}", col.max_length);
        }
    }

    Ok(())
}

//! Dato CLI - store and list information records
//!
//! Thin client over the Dato HTTP API.

mod api;
mod config;
mod logger;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;

use api::DatoClient;
use config::Config;

#[derive(Parser)]
#[command(name = "dato")]
#[command(about = "Dato CLI - store and list information records", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new Dato
    Add {
        /// Information payload (or use -f for file)
        information: Option<String>,
        /// Read information from file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List all Datos
    List,

    /// Check that the API is reachable
    Health,

    /// Show or update configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Add { information, file } => cmd_add(information, file).await,
        Commands::List => cmd_list().await,
        Commands::Health => cmd_health().await,
        Commands::Config { base_url } => cmd_config(base_url),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_add(information: Option<String>, file: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = DatoClient::new(&config.base_url);

    let payload = match (information, file) {
        (Some(i), None) => i,
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))?
        }
        (Some(_), Some(_)) => {
            bail!("Cannot specify both information and --file");
        }
        (None, None) => {
            bail!("Nothing to store. Pass the information or use --file");
        }
    };

    tracing::debug!("Creating Dato ({} bytes)", payload.len());
    let id = client.create_dato(&payload).await?;

    println!("{} Dato stored: {}", "✓".green(), id.cyan());

    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let client = DatoClient::new(&config.base_url);

    let datos = client.list_datos().await?;

    if datos.is_empty() {
        println!("No datos found.");
        return Ok(());
    }

    println!("{}", "Datos:".bold());
    for dato in datos {
        println!(
            "  {}  {}",
            dato.id.as_deref().unwrap_or("-").dimmed(),
            truncate_string(&dato.information, 80)
        );
    }

    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = DatoClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);

    match client.health().await {
        Ok(health) => {
            println!("{} (v{}, {})", "OK".green(), health.version, health.status);
            Ok(())
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = base_url {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url.cyan());

    Ok(())
}

//! Contact Finder CLI
//!
//! Runs the sales contact finder crew, or calls the contact storage tool directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_finder_core::crew::{CrewConfig, CrewInputs, SalesCrew, DEFAULT_REPORT_PATH};
use contact_finder_core::models::ModelConfig;
use contact_finder_core::storage::ContactStorageTool;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Contact Finder - research a company and find who to sell to")]
struct Args {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Run the crew on a target company
    Run {
        /// Company to research (prompted if omitted)
        #[arg(short, long)]
        company: Option<String>,
        /// Description of the product you sell (prompted if omitted)
        #[arg(short, long)]
        product: Option<String>,
        /// Where to write the outreach report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// Store a company and its contacts in the contact database
    Store {
        /// JSON payload, `@path` to read a file, or `-` for stdin
        input: String,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolve a `store` argument to its JSON text
fn read_payload(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        Ok(buf)
    } else if let Some(path) = input.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    } else {
        Ok(input.to_string())
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    anyhow::ensure!(!value.is_empty(), "{} is required", label);
    Ok(value)
}

async fn run_crew(company: Option<String>, product: Option<String>, output: PathBuf) -> Result<()> {
    let target_company = match company {
        Some(c) => c,
        None => prompt("Enter Target Company")?,
    };
    let our_product = match product {
        Some(p) => p,
        None => prompt("Describe your product")?,
    };

    let config = CrewConfig {
        model: ModelConfig::from_env()?,
        report_path: output,
    };
    let inputs = CrewInputs::new(target_company, our_product);
    tracing::info!(
        provider = config.model.provider.display_name(),
        model = %config.model.model,
        "Using LLM"
    );

    let result = SalesCrew::new(config)
        .kickoff(&inputs)
        .await
        .context("An error occurred while running the crew")?;

    println!("\nResults:");
    println!("{}", result.strategy.report);
    println!("\nContacts: {}", result.contacts.storage_summary);
    println!("Report written to {}", result.report_path.display());
    Ok(())
}

async fn store(input: &str) -> Result<()> {
    let tool = ContactStorageTool::from_env()?;
    let payload = read_payload(input)?;
    println!("{}", tool.store(payload).await);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the environment may already be set
    let _ = dotenvy::dotenv();
    init_tracing();

    match Args::parse().command {
        CliCommand::Run {
            company,
            product,
            output,
        } => run_crew(company, product, output).await,
        CliCommand::Store { input } => store(&input).await,
    }
}

use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use catalog_core::{load_settings, HttpCatalogApi};
use clap::{Parser, Subcommand};
use shared::domain::ProductDraft;
use tracing_subscriber::EnvFilter;

mod flow;
mod render;

use flow::{run_command, CatalogCommand};

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Browse and extend the demo product catalog")]
struct Cli {
    /// Settings file; defaults to ./catalog.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(base) = cli.api_base_url {
        settings.api_base_url = base;
    }
    let api = HttpCatalogApi::new(&settings).context("invalid catalog endpoint settings")?;
    tracing::info!(list_url = %api.list_url(), create_url = %api.create_url(), "catalog endpoints");

    let command = match cli.command {
        Command::List => CatalogCommand::List,
        Command::Add {
            title,
            price,
            description,
            category,
            image,
        } => CatalogCommand::add(ProductDraft {
            title,
            price,
            description,
            category,
            image,
        }),
    };

    let outcome = run_command(Arc::new(api), command).await;
    for line in &outcome.lines {
        println!("{line}");
    }

    if outcome.load_failed() {
        bail!("catalog could not be loaded");
    }
    Ok(())
}

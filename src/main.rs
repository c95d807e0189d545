use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};

mod apis;
mod constants;
mod error;
mod logging;
mod pipeline;
mod transform;
mod types;

use crate::apis::donjon::DonjonClient;
use crate::types::SpellApi;

#[derive(Parser)]
#[command(name = "tome_scraper")]
#[command(about = "Fetches Donjon 5e spell data and converts it to Tome format")]
#[command(version = "0.1.0")]
struct Cli {
    /// JSON file whose keys are the spell names to fetch
    spell_file: PathBuf,

    /// Override the Donjon endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    let contents = match std::fs::read_to_string(&cli.spell_file) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Could not read spell file {}: {}", cli.spell_file.display(), e);
            std::process::exit(1);
        }
    };

    let names = match pipeline::spell_names_from_json(&contents) {
        Ok(names) => names,
        Err(e) => {
            error!("Could not parse spell file {}: {}", cli.spell_file.display(), e);
            std::process::exit(1);
        }
    };

    let api: Arc<dyn SpellApi> = Arc::new(match cli.endpoint {
        Some(endpoint) => DonjonClient::with_base_url(endpoint),
        None => DonjonClient::new(),
    });

    let result = pipeline::fetch_all(api, &names).await;
    if !result.errors.is_empty() {
        warn!("{} of {} spells failed to fetch", result.errors.len(), result.total);
    }

    // Stdout carries nothing but the JSON array; all diagnostics are on
    // stderr.
    let json = pipeline::to_tome_json(&result.spells)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}

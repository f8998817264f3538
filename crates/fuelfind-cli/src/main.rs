mod output;
mod prompt;

use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use fuelfind_core::{search, AppConfig, SearchError, SearchMode, SearchRequest, SearchResult};
use fuelfind_feed::FeedClient;
use tracing_subscriber::EnvFilter;

use crate::output::write_payload;
use crate::prompt::Prompter;

#[derive(Debug, Parser)]
#[command(name = "fuelfind")]
#[command(about = "Find the best-matching fuel station near a point")]
struct Cli {
    /// Feed request timeout in seconds (overrides FUELFIND_FEED_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prompt for coordinates, product and search case (default)
    Interactive,
    /// Run a single search from command-line arguments
    Search {
        /// Latitude in decimal degrees (comma or dot decimal separator)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_decimal)]
        lat: f64,
        /// Longitude in decimal degrees (comma or dot decimal separator)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_decimal)]
        lng: f64,
        /// Product: 93, 95, 97, Diesel or Kerosene
        #[arg(long)]
        product: String,
        /// Only consider stations with a convenience store
        #[arg(long)]
        store: bool,
        /// Only consider stations at the lowest price
        #[arg(long)]
        cheapest: bool,
    },
}

fn parse_decimal(raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let payload = SearchResult::from(SearchError::Unexpected(e.to_string()));
        write_payload(&mut io::stdout().lock(), &payload, false)?;
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = fuelfind_core::load_app_config()?;
    init_tracing(&config)?;

    let timeout = Duration::from_secs(cli.timeout_secs.unwrap_or(config.feed_timeout_secs));

    let (request, framed) = match cli.command {
        None | Some(Commands::Interactive) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            (prompter.collect_request()?, true)
        }
        Some(Commands::Search {
            lat,
            lng,
            product,
            store,
            cheapest,
        }) => (
            SearchRequest {
                lat,
                lng,
                product,
                mode: SearchMode::from_flags(store, cheapest),
            },
            false,
        ),
    };

    let feed = FeedClient::with_endpoint(&config.feed_url, &config.user_agent)?;
    let result = search(&feed, &request, timeout).await;

    let mut stdout = io::stdout().lock();
    write_payload(&mut stdout, &result, framed)?;
    stdout.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout only ever carries the JSON payload.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

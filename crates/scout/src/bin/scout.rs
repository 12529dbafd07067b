// ABOUTME: CLI binary for scout: runs searches, statistics, and detail lookups and prints JSON.
// ABOUTME: parse-file runs the search-page strategies on a saved HTML file without any network access.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use listing_scout::{parse_search_page, Client, ListingStatus, Location};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Extract real-estate listings and market statistics")]
struct Args {
    /// Listing site base URL for search and statistics pages
    #[arg(long = "base-url", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true)]
    timeout: Option<u64>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<PathBuf>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing", global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl search results for a city, optionally narrowed to a neighborhood
    Search {
        city: String,
        state: String,
        #[arg(short = 'n', long = "neighborhood")]
        neighborhood: Option<String>,
        /// for-sale or sold
        #[arg(short = 's', long = "status", default_value = "sold")]
        status: ListingStatus,
        /// Maximum number of result pages
        #[arg(long = "max-pages")]
        max_pages: Option<u32>,
    },
    /// Market statistics for a city or neighborhood
    Stats {
        city: String,
        state: String,
        #[arg(short = 'n', long = "neighborhood")]
        neighborhood: Option<String>,
    },
    /// Details for a single listing URL
    Detail { url: String },
    /// Extract listings from a saved search page
    ParseFile {
        path: PathBuf,
        /// URL the page was saved from
        #[arg(long = "url", default_value = "file://saved-page")]
        url: String,
        /// for-sale or sold
        #[arg(short = 's', long = "status", default_value = "sold")]
        status: ListingStatus,
    },
}

fn location(city: String, state: String, neighborhood: Option<String>) -> Location {
    let loc = Location::new(city, state);
    match neighborhood {
        Some(n) => loc.with_neighborhood(n),
        None => loc,
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: &Args) -> anyhow::Result<String> {
    let mut builder = Client::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url.clone());
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    if let Command::Search {
        max_pages: Some(max_pages),
        ..
    } = &args.command
    {
        builder = builder.max_pages(*max_pages);
    }
    let client = builder.build()?;

    let json = match &args.command {
        Command::Search {
            city,
            state,
            neighborhood,
            status,
            ..
        } => {
            let loc = location(city.clone(), state.clone(), neighborhood.clone());
            let listings = client
                .search(&loc, *status)
                .await?;
            serde_json::to_string_pretty(&listings)?
        }
        Command::Stats {
            city,
            state,
            neighborhood,
        } => {
            let loc = location(city.clone(), state.clone(), neighborhood.clone());
            let stats = client.market_stats(&loc).await?;
            serde_json::to_string_pretty(&stats)?
        }
        Command::Detail { url } => {
            let listing = client.listing_detail(url).await?;
            serde_json::to_string_pretty(&listing)?
        }
        Command::ParseFile { path, url, status } => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("reading file {:?}", path))?;
            let listings = parse_search_page(
                &html,
                url,
                *status,
                client.options().window,
            )?;
            serde_json::to_string_pretty(&listings)?
        }
    };
    Ok(json)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let start = Instant::now();
    let result = run(&args).await;
    let elapsed = start.elapsed();

    let code = match result {
        Ok(json) => {
            if let Some(output_path) = &args.output {
                match fs::write(output_path, &json) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("error writing to {:?}: {}", output_path, e);
                        ExitCode::from(1)
                    }
                }
            } else {
                println!("{}", json);
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    };

    if args.timing {
        eprintln!("elapsed: {}ms", elapsed.as_millis());
    }

    code
}

//! Search-Panel main entry point
//!
//! This is the command-line interface for the Search-Panel operator console.

mod shell;

use anyhow::Context;
use clap::{Parser, Subcommand};
use search_panel::api::Pagination;
use search_panel::config::{load_config, validate, Config};
use search_panel::controller::{PageForm, SearchForm};
use search_panel::output::{renderer, Renderer};
use search_panel::view::Notice;
use search_panel::Panel;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Search-Panel: operator console for a search engine backend
///
/// Starts and stops crawls, queues single pages for indexing, shows indexing
/// statistics, and runs searches against the backend's `/api` endpoints.
#[derive(Parser, Debug)]
#[command(name = "search-panel")]
#[command(version)]
#[command(about = "Operator console for a search engine backend", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Backend root URL (overrides the configuration file)
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Print display models as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show indexing statistics
    Stats,

    /// Start a full crawl
    Start,

    /// Stop the running crawl
    Stop,

    /// Queue a single page for indexing
    IndexPage {
        /// Page URL, sent as-is
        url: String,
    },

    /// Search the indexed corpus
    Search {
        /// Search query, sent as-is
        query: String,

        /// Restrict results to this site
        #[arg(long, default_value = "")]
        site: String,

        /// Number of results to skip
        #[arg(long)]
        offset: Option<u32>,

        /// Maximum number of results (overrides the configuration file)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Interactive session with tabs
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(cli.config.as_ref(), cli.base_url.as_deref())?;
    tracing::info!("Using backend {}", config.backend.base_url);

    let output = renderer(cli.json);
    let (mut panel, notices) = Panel::new(&config)?;

    match cli.command {
        Command::Stats => {
            panel
                .load()
                .await
                .map_err(|e| transport_failure(&*output, e))?;
            println!("{}", output.statistics(&panel.statistics_panel()));
        }
        Command::Start => {
            let notice = panel
                .start_indexing()
                .await
                .map_err(|e| transport_failure(&*output, e))?;
            println!("{}", output.notice(&notice));
        }
        Command::Stop => {
            let notice = panel
                .stop_indexing()
                .await
                .map_err(|e| transport_failure(&*output, e))?;
            println!("{}", output.notice(&notice));
        }
        Command::IndexPage { url } => {
            panel.page_form = PageForm::new(url);
            let notice = panel
                .index_page()
                .await
                .map_err(|e| transport_failure(&*output, e))?;
            println!("{}", output.notice(&notice));
        }
        Command::Search {
            query,
            site,
            offset,
            limit,
        } => {
            panel.search_form = SearchForm::new(query, site);
            let page = Pagination {
                offset,
                limit: limit.or(config.search.limit),
            };
            panel
                .search_page(page)
                .await
                .map_err(|e| transport_failure(&*output, e))?;
            println!("{}", output.search(&panel.search_panel()));
        }
        Command::Shell => {
            shell::run(panel, notices, output).await?;
        }
    }

    Ok(())
}

/// Loads the configuration file (or defaults) and applies CLI overrides
fn resolve_config(path: Option<&PathBuf>, base_url: Option<&str>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(base_url) = base_url {
        config.backend.base_url = base_url.to_string();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Prints the generic failure notice and converts the error for exit
fn transport_failure(
    output: &(dyn Renderer + Send + Sync),
    error: search_panel::TransportError,
) -> anyhow::Error {
    eprintln!("{}", output.notice(&Notice::transport_failure()));
    anyhow::Error::new(error)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that stdout carries only rendered output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("search_panel=info,warn"),
            1 => EnvFilter::new("search_panel=debug,info"),
            2 => EnvFilter::new("search_panel=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

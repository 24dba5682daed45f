mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use salesdash_core::{env_string, SalesPeriod, SortDirection, SortKey};
use salesdash_llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:37780/api/askGemini";

#[derive(Parser)]
#[command(name = "salesdash")]
#[command(about = "Sales dashboard API with AI-assisted analysis", long_about = None)]
struct Cli {
    /// SQLite database holding the FAQ collection
    #[arg(long, global = true, env = "SALESDASH_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Search and sort selection shared by `customers` and `export`.
#[derive(Args)]
pub(crate) struct QueryArgs {
    #[arg(short, long, default_value = "")]
    search: String,
    /// One of name, amount, date
    #[arg(long)]
    sort_by: Option<SortKey>,
    /// asc or desc
    #[arg(long)]
    sort_order: Option<SortDirection>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Defaults to SALESDASH_PORT, then 37780
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print a sales series as JSON
    Sales {
        /// monthly or weekly
        #[arg(long, default_value_t = SalesPeriod::Monthly)]
        period: SalesPeriod,
    },
    /// Print the filtered and sorted customer table as JSON
    Customers {
        #[command(flatten)]
        query: QueryArgs,
        /// Click a column header; repeat to click several times
        #[arg(long = "toggle")]
        toggles: Vec<SortKey>,
    },
    /// Write the customer table as delimited text
    Export {
        #[command(flatten)]
        query: QueryArgs,
        /// Comma-separated columns: name,email,amount,date,status
        #[arg(long)]
        columns: Option<String>,
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        /// Defaults to customer_data_<date>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the sales and customer summaries sent to the model
    Summary,
    /// Run the combined sales and customer analysis through a gateway
    Analyze {
        /// Full URL of the ask endpoint
        #[arg(long)]
        gateway: Option<String>,
    },
    /// Manage the FAQ collection
    Faq {
        #[command(subcommand)]
        action: FaqAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum FaqAction {
    List,
    Add { question: String, answer: String },
    Edit { id: String, question: String, answer: String },
    Delete { id: String },
}

pub(crate) fn get_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("salesdash")
            .join("salesdash.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Missing key is not fatal: the server starts and generation calls fail.
pub(crate) fn get_api_key() -> String {
    env_string("GEMINI_API_KEY").unwrap_or_else(|| {
        tracing::warn!("GEMINI_API_KEY is not set; AI requests will fail");
        String::new()
    })
}

pub(crate) fn get_base_url() -> String {
    env_string("SALESDASH_GEMINI_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

pub(crate) fn get_model() -> String {
    env_string("SALESDASH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned())
}

pub(crate) fn get_gateway_url(flag: Option<String>) -> String {
    flag.or_else(|| env_string("SALESDASH_GATEWAY_URL"))
        .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host, cli.db).await?,
        Commands::Sales { period } => commands::dashboard::run_sales(period)?,
        Commands::Customers { query, toggles } => commands::dashboard::run_customers(&query, &toggles)?,
        Commands::Export { query, columns, delimiter, output } => {
            commands::dashboard::run_export(&query, columns.as_deref(), delimiter, output)?;
        },
        Commands::Summary => commands::dashboard::run_summary(),
        Commands::Analyze { gateway } => commands::analyze::run(gateway).await?,
        Commands::Faq { action } => commands::faq::run(action, cli.db).await?,
    }

    Ok(())
}

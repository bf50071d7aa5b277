use anyhow::{Context, Result};
use biodata::{BiodataBrowser, Config, EntrezConfig, HttpEntrezClient, config, logging};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "biodata",
    version,
    about = "Browse NCBI Entrez sequence databases from the terminal",
    long_about = None
)]
struct Cli {
    /// Default Entrez database for nucleotide searches
    #[arg(long, default_value = config::DEFAULT_DATABASE)]
    database: String,

    /// Maximum number of results per search
    #[arg(short = 'n', long, default_value = "20")]
    max_results: usize,

    /// NCBI API key (raises the request rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// File a downloaded sequence is written to (overwritten)
    #[arg(long, default_value = config::DEFAULT_SEQUENCE_PATH)]
    sequence_path: PathBuf,

    /// Where diagnostic logs are written
    #[arg(long, default_value = "biodata.log")]
    log_file: PathBuf,

    /// HTTP timeout for Entrez requests, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Exit with an error when a search fails instead of showing it
    #[arg(long)]
    exit_on_fetch_error: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// E-utilities base URL
    #[arg(long, hide = true, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            entrez: EntrezConfig {
                base_url: self.base_url,
                database: self.database,
                api_key: self.api_key.filter(|key| !key.is_empty()),
                max_results: self.max_results,
                timeout: Duration::from_secs(self.timeout_secs),
            },
            sequence_path: self.sequence_path,
            fatal_fetch_errors: self.exit_on_fetch_error,
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_file, cli.verbose)?;

    let config = cli.into_config();
    tracing::info!(
        database = %config.entrez.database,
        max_results = config.entrez.max_results,
        "starting biodata"
    );

    let client = HttpEntrezClient::new(&config.entrez).context("Failed to create Entrez client")?;
    let mut browser = BiodataBrowser::new(&config, Arc::new(client))?;
    browser.run()
}

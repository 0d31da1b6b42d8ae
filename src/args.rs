use clap::Parser;
use seo_harvest::HarvestConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-harvest")]
#[command(about = "Extracts titles, meta descriptions, headings and OpenGraph tags from a list of pages into CSV")]
#[command(version)]
pub struct Args {
    /// File with one URL per line (`-` reads stdin)
    pub input: Option<PathBuf>,

    /// Extra URL to scrape, after those from the input file (repeatable)
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Destination CSV file (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Delay between requests in seconds
    #[arg(short, long)]
    pub delay: Option<f64>,

    /// Upper bound of a random extra delay in seconds
    #[arg(short, long)]
    pub jitter: Option<f64>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<f64>,

    /// User-Agent header for requests
    #[arg(short = 'A', long)]
    pub user_agent: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Layer command-line flags over a base configuration
    pub fn apply(&self, mut config: HarvestConfig) -> HarvestConfig {
        if let Some(input) = &self.input {
            config.input_path = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(delay) = self.delay {
            config.delay_seconds = delay;
        }
        if let Some(jitter) = self.jitter {
            config.jitter_seconds = jitter;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

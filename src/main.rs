//! media-resolver command-line client.
//!
//! ```text
//! media-resolver [--config resolver.toml] resolve <url> [--lang de] [--audio-only]
//! media-resolver [--config resolver.toml] stream <url> [--output dir]
//! ```
//!
//! Endpoints come from the config file and/or `API_BASE_URL`
//! (comma-separated, in failover order).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use media_resolver::config::{self, ResolverConfig};
use media_resolver::media::{MediaRequest, MediaResolver, StreamFetcher, StreamResult};
use media_resolver::observability::{logging, metrics};
use media_resolver::transport::HttpTransport;

const FALLBACK_FILENAME: &str = "download.bin";

#[derive(Parser)]
#[command(name = "media-resolver")]
#[command(about = "Resolve media download links across failover endpoints", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a media URL and print the validated response
    Resolve {
        url: String,
        /// Accept-Language tag sent to the backend
        #[arg(long)]
        lang: Option<String>,
        /// Request the audio track only
        #[arg(long)]
        audio_only: bool,
    },
    /// Download a direct stream URL
    Stream {
        url: String,
        /// Directory to write the file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: ResolverConfig = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_from_env()?,
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.observability.log_level);
    if let Err(e) = logging::init_logging(level) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    metrics::set_enabled(config.observability.metrics_enabled);

    tracing::info!(
        endpoints = config.endpoints.base_urls.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let transport = HttpTransport::new(&config.timeouts, &config.client)?;

    match cli.command {
        Commands::Resolve {
            url,
            lang,
            audio_only,
        } => {
            let resolver = MediaResolver::new(config.endpoint_urls()?, transport);
            let mut request = MediaRequest::new(url).audio_only(audio_only);
            if let Some(lang) = lang {
                request = request.with_lang(lang);
            }

            let response = resolver.resolve(&request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Stream { url, output } => {
            let fetcher = StreamFetcher::new(transport);
            match fetcher.fetch_stream(&url).await? {
                StreamResult::Success { buffer, filename } => {
                    let path = output_path(&output, filename.as_deref());
                    tokio::fs::write(&path, &buffer).await?;
                    println!("{} ({} bytes)", path.display(), buffer.len());
                }
                StreamResult::Error { text } => {
                    return Err(format!("stream fetch failed: {}", text).into());
                }
            }
        }
    }

    Ok(())
}

/// Join `dir` with the final component of `filename`, or the fallback name.
fn output_path(dir: &Path, filename: Option<&str>) -> PathBuf {
    let name = filename
        .and_then(|f| Path::new(f).file_name())
        .and_then(|f| f.to_str())
        .unwrap_or(FALLBACK_FILENAME);
    dir.join(name)
}

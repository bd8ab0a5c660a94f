//! doctext CLI - extract plain text from local or remote documents.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use doctext::{
    DoctextConfig, ExtractionOutcome, HttpFetcher, RawDocument, core::sniff::sniff, extract_document, extract_from_url,
    resolve_with_evidence,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The extracted text only
    Text,
    /// `{"text": ...}` or `{"error_kind": ..., "message": ...}`
    Json,
}

#[derive(Parser)]
#[command(name = "doctext")]
#[command(version)]
#[command(about = "Extract plain text from PDF, DOCX and text documents", long_about = None)]
struct Cli {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a URL or a local file
    Extract {
        /// http(s) URL or local path
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Bearer token sent to the document host
        #[arg(short, long)]
        token: Option<String>,

        /// Declared MIME type (local files only)
        #[arg(long)]
        mime: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Config file for fetching URLs (default: discover doctext.toml)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show how a local file's format is detected
    Detect {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Declared MIME type
        #[arg(long)]
        mime: Option<String>,
    },

    /// Start the HTTP API server
    #[cfg(feature = "api")]
    Serve {
        /// Host to bind
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (default: discover doctext.toml)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Extract {
            source,
            token,
            mime,
            format,
            config,
        } => run_extract(&source, token.as_deref(), mime, format, config.as_deref()).await,

        Commands::Detect { path, mime } => {
            let bytes = std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path.to_string_lossy();
            let (resolved, evidence) = resolve_with_evidence(&bytes, Some(filename.as_ref()), mime.as_deref());

            println!("sniffed:  {}", sniff(&bytes));
            println!("resolved: {} ({})", resolved, evidence.as_str());
            Ok(())
        }

        #[cfg(feature = "api")]
        Commands::Serve { host, port, config } => {
            let mut config = DoctextConfig::load(config.as_deref()).context("Failed to load configuration")?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            doctext::api::serve(config).await.context("Server exited with an error")
        }
    }
}

async fn run_extract(
    source: &str,
    token: Option<&str>,
    mime: Option<String>,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<()> {
    let remote = is_url(source);
    if remote && mime.is_some() {
        bail!("--mime applies to local files only; a fetched document's MIME type comes from the server");
    }
    if !remote && config.is_some() {
        bail!("--config applies to URLs only; local files are read without fetch settings");
    }

    let result = if remote {
        let config = DoctextConfig::load(config).context("Failed to load configuration")?;
        let fetcher = HttpFetcher::new(&config.fetch)?;
        extract_from_url(&fetcher, source, token).await
    } else {
        let bytes = std::fs::read(source).with_context(|| format!("Failed to read {}", source))?;
        let mut document = RawDocument::new(bytes).with_filename(source);
        if let Some(mime) = mime {
            document = document.with_mime(mime);
        }
        extract_document(&document)
    };

    match format {
        OutputFormat::Text => {
            let extraction = result?;
            println!("{}", extraction.text);
            Ok(())
        }
        OutputFormat::Json => {
            let outcome = ExtractionOutcome::from(result);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.is_success() {
                bail!("extraction failed");
            }
            Ok(())
        }
    }
}

fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

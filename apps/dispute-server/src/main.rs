//! Dispute Document Server
//!
//! Accepts uploaded payment dispute PDFs and returns the customer name,
//! disputed amount, card ending and categorized legitimacy evidence found
//! in them. Provides:
//!
//! - `POST /upload` multipart PDF upload
//! - `GET /health` liveness check
//! - optional static file serving for a frontend
//!
//! The same pipeline can be run once from the command line with
//! `dispute-server parse <FILE>`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use evidence_engine::EvidenceEngine;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
    GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_health, handle_upload};

/// Command-line arguments for the dispute server
#[derive(Parser, Debug)]
#[command(name = "dispute-server")]
#[command(about = "Extracts evidence from payment dispute PDFs")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "DISPUTE_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "DISPUTE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Parse timeout in milliseconds. A timed out parse keeps its blocking
    /// worker thread until the PDF backend returns.
    #[arg(long, env = "DISPUTE_TIMEOUT_MS", default_value = "30000")]
    timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "DISPUTE_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// Maximum upload size in megabytes
    #[arg(long, env = "DISPUTE_MAX_UPLOAD_MB", default_value = "25")]
    max_upload_mb: usize,

    /// Directory of static files served for unmatched routes
    #[arg(long, env = "DISPUTE_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Respond 422 instead of `{}` when a PDF has no extractable text
    #[arg(long, env = "DISPUTE_STRICT_EXTRACTION")]
    strict_extraction: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a single PDF and print the result as JSON
    Parse {
        /// Path to the PDF file
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<EvidenceEngine>,
    /// Parse timeout in milliseconds
    pub timeout_ms: u64,
    pub strict_extraction: bool,
}

/// Routes and per-request middleware shared by the server and tests.
pub fn build_router(state: AppState, max_upload_bytes: usize, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/health", get(handle_health))
        .route("/upload", post(handle_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Per-IP limiter allowing `requests_per_second` sustained, with bursts of
/// twice that.
pub fn rate_limit_config(
    requests_per_second: u32,
) -> Option<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>> {
    let requests_per_second = requests_per_second.max(1);
    // The builder takes the time to replenish one slot, not a rate
    let replenish_ms = (1000 / u64::from(requests_per_second)).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(requests_per_second * 2)
        .finish()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let engine = Arc::new(EvidenceEngine::new());

    if let Some(Command::Parse { file, pretty }) = &args.command {
        return parse_file(&engine, file, *pretty);
    }

    serve(args, engine).await
}

fn parse_file(engine: &EvidenceEngine, file: &Path, pretty: bool) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    info!(file = %file.display(), size = bytes.len(), "parsing document");

    let outcome = engine.parse_pdf(&bytes);
    let json = if pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", json);

    Ok(())
}

async fn serve(args: Args, engine: Arc<EvidenceEngine>) -> anyhow::Result<()> {
    info!("Starting dispute server on {}:{}", args.host, args.port);

    let governor_conf = Arc::new(
        rate_limit_config(args.rate_limit).context("invalid rate limiter configuration")?,
    );

    let state = AppState {
        engine,
        timeout_ms: args.timeout_ms,
        strict_extraction: args.strict_extraction,
    };

    let app = build_router(
        state,
        args.max_upload_mb * 1024 * 1024,
        args.static_dir.as_deref(),
    )
    .layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Parse timeout: {}ms", args.timeout_ms);
    info!("Upload limit: {}MB", args.max_upload_mb);
    if let Some(dir) = &args.static_dir {
        info!("Serving static files from {}", dir.display());
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

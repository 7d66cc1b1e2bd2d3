//! cinelist - server-rendered movie browser for the TMDB catalog.

/// Stylesheet and placeholder image.
mod assets;
/// Application configuration (TOML).
mod config;
/// Display formatting for dates, runtimes and languages.
mod format;
/// HTTP routes.
mod server;
#[cfg(test)]
mod test_support;
/// Page view models and templates.
mod views;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use crate::server::{AppState, router};
use cinelist_api::tmdb::{ImageBase, TmdbClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "cinelist", about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Address to listen on (overrides `server.listen`).
    #[arg(long)]
    listen: Option<SocketAddr>,
}

/// Installs the global tracing subscriber.
fn init_tracing() {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_batch_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }
}

/// Builds the TMDB client from the loaded config.
fn build_client(config: &AppConfig) -> Result<TmdbClient> {
    let base_url = Url::parse(&config.tmdb.base_url)
        .with_context(|| format!("invalid tmdb.base_url: {}", config.tmdb.base_url))?;

    TmdbClient::builder()
        .base_url(base_url)
        .api_key(config.tmdb.api_key.clone())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")
}

/// Resolves once Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if the config is invalid or the listener cannot bind.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.dir.as_ref())?;
    let config =
        AppConfig::load(&config_path)?.with_api_key_override(std::env::var("TMDB_API_KEY").ok());
    config.tmdb.warn_if_api_key_missing();

    let client = build_client(&config)?;
    let state = AppState::new(client, ImageBase::new(config.tmdb.image_base_url.clone()));

    let listen = cli.listen.unwrap_or(config.server.listen);
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;
    tracing::info!(%listen, config = %config_path.display(), "cinelist listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

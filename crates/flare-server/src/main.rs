mod http;
mod metrics;
mod state;
mod static_ui;
mod uploads;

use anyhow::Context;
use axum::response::Html;
use axum::routing::get;
use clap::Parser;
use flare_core::store::IncidentStore;
use crate::metrics::init_metrics;
use http::router;
use state::AppState;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "flare")]
#[command(about = "Fire/electrical/hazmat incident reporting API with a JSON-persisted store")]
struct Cli {
    /// HTTP server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    http: String,
    /// Directory holding the incident file and uploaded images
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Keep incidents in memory only, never touch the disk
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    init_metrics();
    let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus metrics recorder")?;

    let store_path = cli.data_dir.join("incidents.json");
    let uploads_dir = cli.data_dir.join("uploads");
    std::fs::create_dir_all(&uploads_dir)
        .with_context(|| format!("Failed to create uploads directory {:?}", uploads_dir))?;

    let store = IncidentStore::open(&store_path, !cli.no_persist);
    info!(
        "Incident store at {:?} ({} incidents loaded, persist: {})",
        store.path(),
        store.len(),
        !cli.no_persist
    );
    metrics::update_store_size(store.len());

    let state = AppState::new(store, uploads_dir, prometheus);

    let app = router(state).route("/", get(|| async { Html(static_ui::UI_HTML) }));

    let listener = tokio::net::TcpListener::bind(&cli.http)
        .await
        .with_context(|| format!("Failed to bind {}", cli.http))?;
    info!("HTTP server listening on http://{}", cli.http);
    axum::serve(listener, app).await?;

    Ok(())
}

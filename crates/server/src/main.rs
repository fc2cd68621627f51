use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use equity_dashboard_core::models::holding::Holding;
use equity_dashboard_core::storage::file::JsonSnapshotStore;
use equity_dashboard_core::storage::traits::SnapshotStore;

#[derive(Debug, Parser)]
#[command(name = "equity-dashboard-server")]
#[command(about = "REST layer serving the durable holdings snapshot")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: String,

    /// Path of the JSON snapshot file
    #[arg(long, default_value = "holdings.json")]
    data_file: String,
}

#[derive(Clone)]
struct AppState {
    // Mutex serializes writes: /update_data replaces the file wholesale,
    // so two concurrent POSTs must not interleave.
    store: Arc<Mutex<JsonSnapshotStore>>,
}

#[derive(Debug, serde::Serialize)]
struct ApiError {
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("equity_dashboard_server=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let state = AppState {
        store: Arc::new(Mutex::new(JsonSnapshotStore::new(&args.data_file))),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/get_data", get(get_data))
        .route("/update_data", post(update_data))
        .with_state(state);

    info!("Snapshot server listening on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// GET /get_data — the current durable snapshot as a record-oriented array.
async fn get_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<Holding>>, (StatusCode, Json<ApiError>)> {
    let store = state.store.lock().await;
    let rows = store.load().await.map_err(internal_err)?;
    Ok(Json(rows))
}

/// POST /update_data — replace the durable snapshot wholesale.
async fn update_data(
    State(state): State<AppState>,
    Json(rows): Json<Vec<Holding>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    let store = state.store.lock().await;
    store.save(&rows).await.map_err(internal_err)?;
    info!("Replaced snapshot with {} rows", rows.len());
    Ok(Json(serde_json::json!({ "status": "success" })))
}

fn internal_err<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ApiError>) {
    error!("Request failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: err.to_string(),
        }),
    )
}

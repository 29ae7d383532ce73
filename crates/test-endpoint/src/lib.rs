//! HTTP echo endpoint.
//!
//! `GET /test?start=..&end=..` answers `200` with
//! `{"start": <start|null>, "end": <end|null>, "data": "success"}`. It exists
//! to check that a scheduling host can reach the machine running the
//! automator; it takes no part in the rules themselves.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** The router and listener live here; the `cli` crate
//! only chooses the bind address.

use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Query parameters accepted by `/test`.
#[derive(Debug, Default, Deserialize)]
pub struct EchoParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Body returned by `/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub start: Option<String>,
    pub end: Option<String>,
    pub data: String,
}

async fn echo(Query(params): Query<EchoParams>) -> (StatusCode, Json<EchoResponse>) {
    debug!(?params, "Echo request");
    (
        StatusCode::OK,
        Json(EchoResponse {
            start: params.start,
            end: params.end,
            data: "success".to_string(),
        }),
    )
}

/// Builds the endpoint's router.
pub fn router() -> Router {
    Router::new().route("/test", get(echo))
}

/// Serves the endpoint on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Test endpoint listening");
    }
    axum::serve(listener, router()).await
}

/// Binds `addr` and serves the endpoint.
pub async fn bind_and_serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener).await
}

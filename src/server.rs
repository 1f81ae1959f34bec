use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::Response,
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::playback::{PlaybackStatusHandler, PlaybackSummary};
use crate::spotify::PlaybackSource;

pub const PLAYBACK_ROUTE: &str = "/api/spotify";

pub fn router<S>(handler: PlaybackStatusHandler<S>) -> Router
where
    S: PlaybackSource + 'static,
{
    Router::new()
        .route(
            PLAYBACK_ROUTE,
            get(playback_status::<S>).options(preflight),
        )
        .route("/health", get(health))
        .with_state(Arc::new(handler))
        .layer(middleware::map_response(cors_headers))
}

pub async fn serve<S>(handler: PlaybackStatusHandler<S>, addr: SocketAddr) -> Result<()>
where
    S: PlaybackSource + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}{}", listener.local_addr()?, PLAYBACK_ROUTE);

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
}

async fn playback_status<S>(
    State(handler): State<Arc<PlaybackStatusHandler<S>>>,
) -> Result<Json<PlaybackSummary>>
where
    S: PlaybackSource + 'static,
{
    Ok(Json(handler.summary().await?))
}

/// Browsers send this before a cross-origin GET with custom headers.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept"),
    );
    response
}

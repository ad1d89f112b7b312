//! HTTP surface: a single read-only GuardDuty status route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::ClientProvider;
use crate::common::errors::Error;
use crate::common::utils::region_or_default;
use crate::status::{account_status, AccountStatus};

pub const STATUS_ROUTE: &str = "/api/v1/aws/guardduty/status";

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientProvider>,
    pub default_region: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(STATUS_ROUTE, get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Always answers 200; remote failures are reported inside the body.
///
/// The query is read as raw pairs so a repeated `region` key takes the first
/// value instead of rejecting the request.
async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<AccountStatus> {
    let region = query
        .into_iter()
        .find(|(key, _)| key == "region")
        .map(|(_, value)| value);
    let region = region_or_default(region, &state.default_region);
    Json(account_status(state.clients.as_ref(), &region).await)
}

pub async fn serve(listen_addr: &str, state: AppState) -> Result<(), Error> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

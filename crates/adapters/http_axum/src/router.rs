//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use reservas_app::ports::ReservationStore;

use crate::error::route_not_found;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` and serves the OpenAPI document at
/// `/api-docs/openapi.json`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ReservationStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(crate::openapi::serve))
        .nest("/api", crate::api::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

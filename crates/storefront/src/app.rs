//! Router assembly.

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::from_fn,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;

use crate::db;
use crate::middleware::{create_session_layer, request_id_middleware};
use crate::routes;
use crate::state::AppState;

/// Build the full storefront router over `store`.
pub fn build_router<Store>(state: AppState, store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    with_layers(routes::routes(), state, store)
}

/// Add health checks, fallback and the middleware stack to `routes`.
pub(crate) fn with_layers<Store>(
    routes: Router<AppState>,
    state: AppState,
    store: Store,
) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = create_session_layer(store, state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes)
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if a configured database is not
/// reachable. Memory-backed deployments are always ready.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.pool() {
        Some(pool) if !db::ping(pool).await => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}

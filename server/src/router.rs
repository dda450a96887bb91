//! Router construction for the Pokedex API.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router with every route and the request tracing layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/list", get(handlers::list))
        .route("/list/:category", get(handlers::list_category))
        .route("/get", get(handlers::get_extremum))
        .route("/get/:name", get(handlers::get_by_name))
        .route("/count", get(handlers::count))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

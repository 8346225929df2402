use axum::{
    routing::{get, post},
    Router,
};
use crate::controllers::roi_controller::{
    // Estimation session
    calculate, get_last_estimate, clear_estimate,
    // Advice & reference data
    get_recommendations, list_cities, health,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router. Every handler shares the one `AppState`.
pub fn roi_routes(state: AppState) -> Router {
    Router::new()
        .route("/estimate",        post(calculate))
        .route("/estimate/last",   get(get_last_estimate).delete(clear_estimate))
        .route("/recommendations", get(get_recommendations))
        .route("/cities",          get(list_cities))
        .route("/health",          get(health))
        .with_state(state)
}

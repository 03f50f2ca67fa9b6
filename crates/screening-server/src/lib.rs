//! screening-server
//!
//! HTTP shell around the screening engine: liveness, the instrument
//! catalogue, JSON and HTML questionnaire submission, and the slide
//! manifest. Stateless per request; nothing a respondent submits is kept.

pub mod config;
pub mod error;
pub mod manifest;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/instruments", get(routes::instruments::list_instruments))
        .route(
            "/api/instruments/{id}",
            get(routes::instruments::get_instrument_form),
        )
        .route(
            "/api/instruments/{id}/score",
            post(routes::instruments::score_submission),
        )
        .route("/api/slides", get(routes::slides::list_slides))
        .route(
            "/screening/{id}",
            get(routes::screening::show_form).post(routes::screening::submit_form),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}

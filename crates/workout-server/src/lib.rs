//! workout-server
//!
//! HTTP JSON API over the workout store. The library exposes the router so
//! integration tests can drive it in-process without binding a socket.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod settings;
pub mod state;

use std::path::Path;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use state::AppState;

pub fn router(state: AppState, public_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/config", get(routes::config::get_config))
        .route("/api/workout-data", get(routes::workout::get_workout_data))
        .route("/api/set-start-date", post(routes::workout::set_start_date))
        .route(
            "/api/week/{week_number}",
            get(routes::weeks::get_week).post(routes::weeks::save_week),
        )
        .route(
            "/api/exercises-for-focus",
            post(routes::focus::exercises_for_focus_areas),
        )
        .route(
            "/api/export/week/{week_number}",
            get(routes::export::export_week),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state);

    match public_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}

//! Router construction: routes plus the shared middleware stack.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::AppState;

/// Build the axum router with all endpoints and middleware.
///
/// The CORS layer wraps every route, so the allow-all origin header is
/// present on error responses too, not just successes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/schools", get(handlers::get_schools))
        .route("/api/grades", get(handlers::get_grades))
        .route("/api/classes", get(handlers::get_classes))
        .route("/api/equipment", get(handlers::get_equipment))
        .route("/api/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::report::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_welcome))
        .route("/health", get(health::health_handler))
        .route("/api/user-info", post(handlers::handle_user_info))
        .route(
            "/api/fortune-analysis",
            post(handlers::handle_fortune_analysis),
        )
        .with_state(state)
}

/// Any origin with credentials by default; a single origin when one is configured.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    match allowed_origin {
        None => Ok(CorsLayer::very_permissive()),
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ALLOWED_ORIGIN '{origin}' is not a valid origin"))?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true))
        }
    }
}

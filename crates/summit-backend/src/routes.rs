use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, handlers};

/// The site is served from other origins, so any origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hello", get(handlers::root::hello))
        .route("/sessions", get(handlers::api::sessions::list))
        .route("/register", post(handlers::api::registrations::register))
        .route("/registrations", get(handlers::api::registrations::list))
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root::index))
        .route("/test", get(handlers::health::get))
        .nest("/api", api_routes())
        .fallback(handlers::error::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state)
}

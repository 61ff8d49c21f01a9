/// Mailrelay API - HTTP front end for SES
///
/// This module wires the REST handlers, middleware and shared context into
/// one axum router.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;
pub mod server;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use mailrelay_core::constants::MAX_REQUEST_BODY_BYTES;
use std::any::Any;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Build the application router
pub fn router(ctx: Arc<ApiContext>) -> Router {
    let v1_router = Router::new()
        .route("/send", post(api::send::handler))
        .route("/health", get(api::health::handler));

    Router::new()
        .nest("/v1", v1_router)
        .fallback(api::not_found)
        // Outermost first: body limit, request logging, then panic recovery
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
                .layer(axum_middleware::from_fn(middleware::logging_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(ctx)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Request handler panicked");
    ApiError::Internal("Internal server error".to_string()).into_response()
}

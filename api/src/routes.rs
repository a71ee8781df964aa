//! Router construction
//!
//! Route table plus the middleware stack applied to every request.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let app = Router::new()
        // Health checks
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        // Animals
        .route("/dogs", get(handlers::get_dogs).post(handlers::post_dog))
        .route("/cats", get(handlers::get_cats).post(handlers::post_cat))
        .with_state(state);

    with_middleware(app)
}

/// Wrap a router in request id, tracing, CORS and panic recovery layers
pub fn with_middleware(router: Router) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(CatchPanicLayer::custom(handle_panic));

    router.layer(middleware)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}

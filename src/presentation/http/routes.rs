use super::{
    errors::AppError,
    handlers::{docs, health, resources},
    middleware::request_id::request_id_middleware,
    state::{AppState, ResourceState},
};
use crate::domain::{blog::entity::Blog, news::entity::NewsItem, resource::entity::Resource};
use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use std::{any::Any, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Mounts the five CRUD/list routes for one resource under `/v1/{table}`.
fn resource_routes<R: Resource>() -> Router<AppState>
where
    ResourceState<R>: FromRef<AppState>,
{
    let collection = format!("/v1/{}", R::TABLE);
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(
            &collection,
            get(resources::get_all::<R>).post(resources::create::<R>),
        )
        .route(
            &item,
            get(resources::get_by_id::<R>)
                .put(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
}

/// Converts a handler panic into the regular JSON error response.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(detail).into_response()
}

/// Request-wide middleware, outermost last.
fn with_middleware<S>(router: Router<S>, request_timeout: Duration, body_limit: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();
    let body_limit = state.config.body_limit_bytes;

    let routes = Router::new()
        .route("/v1/health", get(health::health_check))
        .route("/v1/docs", get(docs::api_docs))
        .merge(resource_routes::<Blog>())
        .merge(resource_routes::<NewsItem>());

    with_middleware(routes, request_timeout, body_limit).with_state(state)
}

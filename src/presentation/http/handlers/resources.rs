//! CRUD and listing handlers shared by every resource type.
//!
//! Each handler is generic over the record type; the router instantiates them
//! once per table.

use crate::{
    config::PaginationConfig,
    domain::{
        resource::entity::{Resource, ResourceInput},
        shared::{
            errors::DomainError,
            pagination::{DEFAULT_PAGE, PageResult, PaginationQuery},
        },
    },
    presentation::http::{errors::AppError, state::ResourceState},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Substring to look for in titles; empty or absent means no filter.
    #[serde(default)]
    pub title: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Turns raw query values into a [`PaginationQuery`].
///
/// A missing or non-positive page means the first page. A missing size takes
/// the configured default, an oversized one is clamped to the maximum, and a
/// non-positive one is rejected.
pub fn pagination_from_params(
    params: &ListParams,
    cfg: &PaginationConfig,
) -> Result<PaginationQuery, DomainError> {
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let requested = params.size.unwrap_or(cfg.default_size);
    let size = if requested > cfg.max_size {
        warn!("Page size clamped from {} to {}", requested, cfg.max_size);
        cfg.max_size
    } else {
        requested
    };
    PaginationQuery::new(page, size)
}

fn validated(
    payload: Result<Json<ResourceInput>, JsonRejection>,
) -> Result<ResourceInput, AppError> {
    let Json(input) = payload?;
    input.validate()?;
    Ok(input)
}

#[instrument(skip_all, fields(resource = R::TABLE))]
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    payload: Result<Json<ResourceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let input = validated(payload)?;
    let created = state.use_case.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip_all, fields(resource = R::TABLE))]
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ResourceInput>, JsonRejection>,
) -> Result<Json<R>, AppError> {
    let Path(id) = id?;
    let input = validated(payload)?;
    let updated = state.use_case.update(id, &input).await?;
    Ok(Json(updated))
}

#[instrument(skip_all, fields(resource = R::TABLE))]
pub async fn delete<R: Resource>(
    State(state): State<ResourceState<R>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.use_case.delete(id).await?;
    Ok(StatusCode::OK)
}

#[instrument(skip_all, fields(resource = R::TABLE))]
pub async fn get_by_id<R: Resource>(
    State(state): State<ResourceState<R>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<R>, AppError> {
    let Path(id) = id?;
    let record = state.use_case.get_by_id(id).await?;
    Ok(Json(record))
}

#[instrument(skip_all, fields(resource = R::TABLE))]
pub async fn get_all<R: Resource>(
    State(state): State<ResourceState<R>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PageResult<R>>, AppError> {
    let Query(params) = params?;
    let query = pagination_from_params(&params, &state.pagination)?;
    debug!(
        "Listing {} page={} size={} title={:?}",
        R::TABLE,
        query.page(),
        query.size(),
        params.title
    );
    let page = state.use_case.get_all(&params.title, &query).await?;
    Ok(Json(page))
}

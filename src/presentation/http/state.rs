use crate::{
    application::resource::use_case::ResourceUseCase,
    config::{Config, PaginationConfig},
    domain::{blog::entity::Blog, news::entity::NewsItem, resource::entity::Resource},
};
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub blogs: Arc<ResourceUseCase<Blog>>,
    pub news: Arc<ResourceUseCase<NewsItem>>,
}

/// The slice of [`AppState`] a handler for one resource type needs.
pub struct ResourceState<R: Resource> {
    pub use_case: Arc<ResourceUseCase<R>>,
    pub pagination: PaginationConfig,
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            pagination: self.pagination,
        }
    }
}

impl FromRef<AppState> for ResourceState<Blog> {
    fn from_ref(state: &AppState) -> Self {
        Self {
            use_case: Arc::clone(&state.blogs),
            pagination: state.config.pagination,
        }
    }
}

impl FromRef<AppState> for ResourceState<NewsItem> {
    fn from_ref(state: &AppState) -> Self {
        Self {
            use_case: Arc::clone(&state.news),
            pagination: state.config.pagination,
        }
    }
}

use super::entity::{Resource, ResourceInput};
use crate::domain::shared::{
    errors::DomainError,
    pagination::{PageResult, PaginationQuery},
};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Inserts a new row under a freshly generated id and returns it as stored.
    async fn create(&self, input: &ResourceInput) -> Result<R, DomainError>;
    /// Replaces `title` and `content`; `NotFound` when `id` does not exist.
    async fn update(&self, id: Uuid, input: &ResourceInput) -> Result<R, DomainError>;
    /// Hard delete; `NotFound` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    async fn get_by_id(&self, id: Uuid) -> Result<R, DomainError>;
    /// Lists rows whose title contains `title_filter` (no filtering when
    /// empty), oldest first.
    async fn get_all(
        &self,
        title_filter: &str,
        query: &PaginationQuery,
    ) -> Result<PageResult<R>, DomainError>;
}

use crate::domain::{
    resource::{
        entity::{Resource, ResourceInput},
        repository::ResourceRepository,
    },
    shared::{
        errors::DomainError,
        pagination::{PageResult, PaginationQuery},
    },
};
use uuid::Uuid;

/// Entry point for the delivery layer. Request-level rules (ownership,
/// moderation) belong here; today every call goes straight to the repository.
pub struct ResourceUseCase<R: Resource> {
    repository: Box<dyn ResourceRepository<R>>,
}

impl<R: Resource> ResourceUseCase<R> {
    pub fn new(repository: Box<dyn ResourceRepository<R>>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, input: &ResourceInput) -> Result<R, DomainError> {
        self.repository.create(input).await
    }

    pub async fn update(&self, id: Uuid, input: &ResourceInput) -> Result<R, DomainError> {
        self.repository.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repository.delete(id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<R, DomainError> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_all(
        &self,
        title_filter: &str,
        query: &PaginationQuery,
    ) -> Result<PageResult<R>, DomainError> {
        self.repository.get_all(title_filter, query).await
    }
}

pub mod sqlx_resource_repository;

use crate::domain::{
    resource::{
        entity::{Resource, ResourceInput},
        repository::ResourceRepository,
    },
    shared::{
        errors::DomainError,
        pagination::{PageResult, PaginationQuery, paginate},
    },
};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const COLUMNS: &str = "id, title, content, created_at";

/// Postgres repository for any [`Resource`]; one instance per table, all
/// sharing the same pool.
pub struct SqlxResourceRepository<R> {
    pub pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> SqlxResourceRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxResourceRepository for table {}", R::TABLE);
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    fn context(step: &str) -> String {
        format!("{}.{}", R::TABLE, step)
    }

    fn storage_error(step: &str, e: sqlx::Error) -> DomainError {
        let context = Self::context(step);
        error!("{} failed: {}", context, e);
        DomainError::storage(context, e)
    }

    /// A missing row becomes `NotFound`; anything else is a storage failure.
    fn classify(step: &str, id: Uuid, e: sqlx::Error) -> DomainError {
        match e {
            sqlx::Error::RowNotFound => {
                debug!("{} {} not found in {}", R::LABEL, id, Self::context(step));
                DomainError::NotFound {
                    resource: R::LABEL,
                    id,
                }
            }
            other => Self::storage_error(step, other),
        }
    }
}

/// Escapes LIKE metacharacters so the caller's text is matched literally,
/// then wraps it for a substring match.
pub fn like_pattern(filter: &str) -> String {
    let mut escaped = String::with_capacity(filter.len() + 2);
    escaped.push('%');
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn push_title_filter(qb: &mut QueryBuilder<'_, Postgres>, title_filter: &str) {
    if title_filter.is_empty() {
        return;
    }
    qb.push(" WHERE title LIKE ")
        .push_bind(like_pattern(title_filter))
        .push(" ESCAPE '\\'");
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for SqlxResourceRepository<R> {
    #[instrument(skip(self, input), fields(table = R::TABLE))]
    async fn create(&self, input: &ResourceInput) -> Result<R, DomainError> {
        let id = Uuid::now_v7();
        let sql = format!(
            "INSERT INTO {} (id, title, content) VALUES ($1, $2, $3) RETURNING {}",
            R::TABLE,
            COLUMNS
        );

        let created = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::storage_error("create.insert", e))?;

        info!("Created {} {}", R::LABEL, id);
        Ok(created)
    }

    #[instrument(skip(self, input), fields(table = R::TABLE, id = %id))]
    async fn update(&self, id: Uuid, input: &ResourceInput) -> Result<R, DomainError> {
        let sql = format!(
            "UPDATE {} SET title = $1, content = $2 WHERE id = $3 RETURNING {}",
            R::TABLE,
            COLUMNS
        );

        let updated = sqlx::query_as::<_, R>(&sql)
            .bind(&input.title)
            .bind(&input.content)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::classify("update.returning", id, e))?;

        info!("Updated {} {}", R::LABEL, id);
        Ok(updated)
    }

    #[instrument(skip(self), fields(table = R::TABLE, id = %id))]
    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("delete.execute", e))?;

        if result.rows_affected() == 0 {
            debug!(
                "{}: no {} with id {}",
                Self::context("delete.rows_affected"),
                R::LABEL,
                id
            );
            return Err(DomainError::NotFound {
                resource: R::LABEL,
                id,
            });
        }

        info!("Deleted {} {}", R::LABEL, id);
        Ok(())
    }

    #[instrument(skip(self), fields(table = R::TABLE, id = %id))]
    async fn get_by_id(&self, id: Uuid) -> Result<R, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, R::TABLE);

        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::classify("get_by_id.fetch", id, e))
    }

    /// Count and page fetch share one read-only REPEATABLE READ transaction,
    /// so the metadata always describes the snapshot the items came from.
    #[instrument(skip(self), fields(table = R::TABLE, page = query.page(), size = query.size()))]
    async fn get_all(
        &self,
        title_filter: &str,
        query: &PaginationQuery,
    ) -> Result<PageResult<R>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::storage_error("get_all.begin", e))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::storage_error("get_all.set_isolation", e))?;

        let mut count_qb =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(id) FROM {}", R::TABLE));
        push_title_filter(&mut count_qb, title_filter);

        let total_count: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| Self::storage_error("get_all.count", e))?;

        debug!("{} rows match title filter {:?}", total_count, title_filter);

        let conn = &mut tx;
        let page = paginate(total_count, query, move |offset, limit| async move {
            let mut qb =
                QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {}", COLUMNS, R::TABLE));
            push_title_filter(&mut qb, title_filter);
            qb.push(" ORDER BY created_at ASC, id ASC OFFSET ")
                .push_bind(offset)
                .push(" LIMIT ")
                .push_bind(limit);

            let mut items = Vec::new();
            let mut rows = qb.build_query_as::<R>().fetch(&mut **conn);
            while let Some(row) = rows
                .try_next()
                .await
                .map_err(|e| Self::storage_error("get_all.fetch_row", e))?
            {
                items.push(row);
            }
            Ok::<_, DomainError>(items)
        })
        .await?;

        tx.commit()
            .await
            .map_err(|e| Self::storage_error("get_all.commit", e))?;

        Ok(page)
    }
}

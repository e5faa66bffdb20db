use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sqlx::{FromRow, postgres::PgRow};
use ts_rs::TS;
use validator::Validate;

/// Binds a record type to the table it lives in.
///
/// Every resource table has the same shape: `id`, `title`, `content`,
/// `created_at`. Implementors only say where the rows are and how to read
/// the common fields back out.
pub trait Resource:
    for<'r> FromRow<'r, PgRow>
    + Serialize
    + DeserializeOwned
    + Clone
    + std::fmt::Debug
    + Send
    + Sync
    + Unpin
    + 'static
{
    /// Table name. Only ever interpolated from this constant, never from input.
    const TABLE: &'static str;
    /// Singular label used in errors and logs.
    const LABEL: &'static str;

    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// The mutable part of a record, as supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ResourceInput {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: String,
}

impl ResourceInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

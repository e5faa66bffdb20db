use crate::domain::resource::entity::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for NewsItem {
    const TABLE: &'static str = "news";
    const LABEL: &'static str = "News item";

    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

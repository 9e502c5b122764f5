use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `feedback` table. Append-only; rows are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FeedbackRow {
    pub id: i64,
    pub domain: String,
    pub rating: i64,
    pub comment: String,
}

//! SQLite persistence for user feedback on recommended domains.

use sqlx::SqlitePool;

use crate::models::feedback::FeedbackRow;

/// Appends one feedback row. Returns the id SQLite assigned to it.
/// CRITICAL: This table is append-only. Never UPDATE or DELETE rows.
pub async fn append_feedback(
    pool: &SqlitePool,
    domain: &str,
    rating: i64,
    comment: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO feedback (domain, rating, comment) VALUES (?, ?, ?)")
        .bind(domain)
        .bind(rating)
        .bind(comment)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Returns every feedback row, newest first.
pub async fn list_feedback(pool: &SqlitePool) -> Result<Vec<FeedbackRow>, sqlx::Error> {
    sqlx::query_as::<_, FeedbackRow>(
        "SELECT id, domain, rating, comment FROM feedback ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
}

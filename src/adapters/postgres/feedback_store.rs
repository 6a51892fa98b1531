//! PostgreSQL implementation of FeedbackStore.
//!
//! Persists feedback records to a single `feedbacks` table. The table is
//! created if absent at process start; there is no migration path beyond
//! that.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::feedback::{
    FeedbackRecord, FeedbackStats, NewFeedback, Sentiment, StorageError,
};
use crate::ports::FeedbackStore;

/// PostgreSQL implementation of FeedbackStore.
#[derive(Clone)]
pub struct PostgresFeedbackStore {
    pool: PgPool,
}

impl PostgresFeedbackStore {
    /// Creates a new PostgresFeedbackStore over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `feedbacks` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS feedbacks (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                product TEXT NOT NULL,
                feedback TEXT NOT NULL,
                category TEXT NOT NULL,
                sentiment TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create feedbacks table", e))?;

        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for PostgresFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StorageError> {
        // Single statement: either the row commits whole or nothing is
        // visible to subsequent reads.
        let row = sqlx::query(
            r#"
            INSERT INTO feedbacks (name, product, feedback, category, sentiment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(feedback.name())
        .bind(feedback.product())
        .bind(feedback.feedback())
        .bind(feedback.category())
        .bind(feedback.sentiment().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert feedback", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| map_sqlx_error("Failed to read assigned id", e))?;

        Ok(FeedbackRecord::from_new(id, feedback))
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, product, feedback, category, sentiment
            FROM feedbacks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch feedback records", e))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn stats(&self) -> Result<FeedbackStats, StorageError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedbacks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to count feedback records", e))?;

        let category_rows =
            sqlx::query("SELECT category, COUNT(*) AS count FROM feedbacks GROUP BY category")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("Failed to aggregate by category", e))?;

        let sentiment_rows =
            sqlx::query("SELECT sentiment, COUNT(*) AS count FROM feedbacks GROUP BY sentiment")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("Failed to aggregate by sentiment", e))?;

        let mut stats = FeedbackStats {
            total: total as u64,
            ..FeedbackStats::default()
        };

        for row in category_rows {
            let category: String = row
                .try_get("category")
                .map_err(|e| map_sqlx_error("Failed to read category", e))?;
            let count: i64 = row
                .try_get("count")
                .map_err(|e| map_sqlx_error("Failed to read category count", e))?;
            stats.by_category.insert(category, count as u64);
        }

        for row in sentiment_rows {
            let label: String = row
                .try_get("sentiment")
                .map_err(|e| map_sqlx_error("Failed to read sentiment", e))?;
            let count: i64 = row
                .try_get("count")
                .map_err(|e| map_sqlx_error("Failed to read sentiment count", e))?;
            let sentiment = parse_sentiment(&label)?;
            stats.by_sentiment.insert(sentiment, count as u64);
        }

        Ok(stats)
    }
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<FeedbackRecord, StorageError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| map_sqlx_error("Failed to read id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| map_sqlx_error("Failed to read name", e))?;
    let product: String = row
        .try_get("product")
        .map_err(|e| map_sqlx_error("Failed to read product", e))?;
    let feedback: String = row
        .try_get("feedback")
        .map_err(|e| map_sqlx_error("Failed to read feedback", e))?;
    let category: String = row
        .try_get("category")
        .map_err(|e| map_sqlx_error("Failed to read category", e))?;
    let label: String = row
        .try_get("sentiment")
        .map_err(|e| map_sqlx_error("Failed to read sentiment", e))?;
    let sentiment = parse_sentiment(&label)?;

    Ok(FeedbackRecord::rehydrate(
        id, name, product, feedback, category, sentiment,
    ))
}

fn parse_sentiment(label: &str) -> Result<Sentiment, StorageError> {
    label
        .parse::<Sentiment>()
        .map_err(|e| StorageError::database(format!("Stored sentiment is invalid: {}", e)))
}

fn map_sqlx_error(context: &str, e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StorageError::unavailable(format!("{}: {}", context, e))
        }
        _ => StorageError::database(format!("{}: {}", context, e)),
    }
}

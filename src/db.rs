use futures_util::future::BoxFuture;
use sqlx::sqlite::{self, SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::DatabaseConfig;

const SCHEMA: &str = include_str!("../sql/schema.sql");

/// Handle to the relational store. Cheap to clone, the pool is shared.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(30))
            .statement_cache_capacity(100);

        // Every connection to `:memory:` opens its own database, so the pool
        // must hold exactly one connection and never recycle it.
        let pool = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            let options = options
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal);
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?
        };

        sqlx::query(SCHEMA).execute(&pool).await?;
        info!("Connected to database: {}", config.url);

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs `ops` inside a single transaction. Commits when `ops` succeeds,
    /// otherwise rolls back before handing the original error back.
    pub async fn in_transaction<T, F>(&self, ops: F) -> Result<T, sqlx::Error>
    where
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, sqlx::Error>>,
    {
        let mut tx = self.pool.begin().await?;

        let outcome = ops(&mut *tx).await;
        match outcome {
            Ok(value) => {
                tx.commit().await?;
                debug!("Transaction committed");
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback failed after '{}': {}", e, rollback_err);
                } else {
                    debug!("Transaction rolled back: {}", e);
                }
                Err(e)
            }
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count_rows(db: &Database) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_book")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn insert_row(conn: &mut SqliteConnection, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO order_book(id, exchange, pair, price, base_qty) VALUES (?, 'x', 'p', 1.0, 1.0)",
        )
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_schema_is_created_on_connect() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('order_book', 'order_history') ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        assert_eq!(tables, vec!["order_book", "order_history"]);
    }

    #[tokio::test]
    async fn test_in_transaction_commits_on_success() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

        let written = db
            .in_transaction(|conn| {
                Box::pin(async move {
                    insert_row(&mut *conn, "a").await?;
                    insert_row(&mut *conn, "b").await?;
                    Ok::<_, sqlx::Error>(2)
                })
            })
            .await
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(count_rows(&db).await, 2);
    }

    #[tokio::test]
    async fn test_in_transaction_rolls_back_every_statement_on_failure() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

        let result = db
            .in_transaction(|conn| {
                Box::pin(async move {
                    insert_row(&mut *conn, "a").await?;
                    // Duplicate primary key fails the second statement.
                    insert_row(&mut *conn, "a").await?;
                    Ok::<_, sqlx::Error>(())
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(count_rows(&db).await, 0);
    }
}

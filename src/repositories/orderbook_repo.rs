use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::models::DepthOrder;

pub struct OrderBookRepository;

impl OrderBookRepository {
    pub async fn fetch(
        pool: &SqlitePool,
        exchange: &str,
        pair: &str,
    ) -> Result<Vec<DepthOrder>, sqlx::Error> {
        sqlx::query_as::<_, DepthOrder>(
            r#"
                SELECT price, base_qty
                FROM order_book
                WHERE exchange = ? AND pair = ?
            "#,
        )
        .bind(exchange)
        .bind(pair)
        .fetch_all(pool)
        .await
    }

    pub async fn delete_snapshot(
        conn: &mut SqliteConnection,
        exchange: &str,
        pair: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_book WHERE exchange = ? AND pair = ?")
            .bind(exchange)
            .bind(pair)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Inserts `orders` on the caller's connection; the caller owns the
    /// transaction boundary.
    pub async fn insert_batch(
        conn: &mut SqliteConnection,
        exchange: &str,
        pair: &str,
        orders: &[DepthOrder],
    ) -> Result<(), sqlx::Error> {
        for order in orders {
            sqlx::query(
                r#"
                    INSERT INTO order_book(id, exchange, pair, price, base_qty)
                    VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(exchange)
            .bind(pair)
            .bind(order.price)
            .bind(order.base_qty)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }
}

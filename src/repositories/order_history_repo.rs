use sqlx::SqlitePool;

use crate::models::{Client, HistoryOrder};

pub struct OrderHistoryRepository;

impl OrderHistoryRepository {
    pub async fn fetch(
        pool: &SqlitePool,
        client: &Client,
    ) -> Result<Vec<HistoryOrder>, sqlx::Error> {
        sqlx::query_as::<_, HistoryOrder>(
            r#"
                SELECT
                    client_name, exchange_name, label, pair, side, "type",
                    base_qty, price, algorithm_name_placed, lowest_sell_prc,
                    highest_buy_prc, commission_quote_qty, time_placed
                FROM order_history
                WHERE client_name = ? AND exchange_name = ? AND label = ? AND pair = ?
                ORDER BY time_placed ASC, id ASC
            "#,
        )
        .bind(&client.client_name)
        .bind(&client.exchange_name)
        .bind(&client.label)
        .bind(&client.pair)
        .fetch_all(pool)
        .await
    }

    pub async fn insert(pool: &SqlitePool, order: &HistoryOrder) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
                INSERT INTO order_history (
                    client_name, exchange_name, label, pair, side, "type",
                    base_qty, price, algorithm_name_placed, lowest_sell_prc,
                    highest_buy_prc, commission_quote_qty, time_placed
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&order.client_name)
        .bind(&order.exchange_name)
        .bind(&order.label)
        .bind(&order.pair)
        .bind(&order.side)
        .bind(&order.order_type)
        .bind(order.base_qty)
        .bind(order.price)
        .bind(&order.algorithm_name_placed)
        .bind(order.lowest_sell_prc)
        .bind(order.highest_buy_prc)
        .bind(order.commission_quote_qty)
        .bind(order.time_placed)
        .execute(pool)
        .await?;
        Ok(())
    }
}

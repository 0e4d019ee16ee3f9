use tracing::{debug, info};

use crate::db::Database;
use crate::models::DepthOrder;
use crate::repositories::OrderBookRepository;

#[derive(Clone)]
pub struct OrderBookService {
    db: Database,
}

impl OrderBookService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get(&self, exchange: &str, pair: &str) -> Result<Vec<DepthOrder>, sqlx::Error> {
        let orders = OrderBookRepository::fetch(self.db.pool(), exchange, pair).await?;
        debug!("Loaded {} depth rows for {}/{}", orders.len(), exchange, pair);
        Ok(orders)
    }

    /// Publishes `orders` as the new snapshot for `exchange`/`pair`. Readers
    /// see either the previous snapshot or the new one, never a mix.
    pub async fn replace(
        &self,
        exchange: String,
        pair: String,
        orders: Vec<DepthOrder>,
    ) -> Result<(), sqlx::Error> {
        let (removed, inserted) = self
            .db
            .in_transaction(|conn| {
                let exchange = exchange.clone();
                let pair = pair.clone();
                Box::pin(async move {
                    let removed =
                        OrderBookRepository::delete_snapshot(&mut *conn, &exchange, &pair).await?;
                    OrderBookRepository::insert_batch(&mut *conn, &exchange, &pair, &orders)
                        .await?;
                    Ok::<_, sqlx::Error>((removed, orders.len()))
                })
            })
            .await?;

        info!(
            "Replaced order book {}/{}: removed {} rows, inserted {}",
            exchange, pair, removed, inserted
        );
        Ok(())
    }
}

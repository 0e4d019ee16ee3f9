use tracing::{debug, info};

use crate::db::Database;
use crate::models::{Client, HistoryOrder};
use crate::repositories::OrderHistoryRepository;

#[derive(Clone)]
pub struct OrderHistoryService {
    db: Database,
}

impl OrderHistoryService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get(&self, client: &Client) -> Result<Vec<HistoryOrder>, sqlx::Error> {
        OrderHistoryRepository::fetch(self.db.pool(), client).await
    }

    /// Appends `order` under `client`. The client key wins over whatever
    /// identity fields the order carries.
    pub async fn append(&self, client: &Client, mut order: HistoryOrder) -> Result<(), sqlx::Error> {
        if order.client() != *client {
            debug!(
                "Order identity {:?} overridden by path key {:?}",
                order.client(),
                client
            );
            order.assign_client(client);
        }

        OrderHistoryRepository::insert(self.db.pool(), &order).await?;
        info!(
            "Stored {} {} order for {}/{}/{}/{}",
            order.side,
            order.order_type,
            client.client_name,
            client.exchange_name,
            client.label,
            client.pair
        );
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Client;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HistoryOrder {
    // Identity fields may be left out of a request body; the path fills them.
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub exchange_name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub pair: String,
    pub side: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub order_type: String,
    pub base_qty: f64,
    pub price: f64,
    pub algorithm_name_placed: String,
    pub lowest_sell_prc: f64,
    pub highest_buy_prc: f64,
    pub commission_quote_qty: f64,
    pub time_placed: DateTime<Utc>,
}

impl HistoryOrder {
    pub fn client(&self) -> Client {
        Client {
            client_name: self.client_name.clone(),
            exchange_name: self.exchange_name.clone(),
            label: self.label.clone(),
            pair: self.pair.clone(),
        }
    }

    /// Overwrites the identity fields with `client`.
    pub fn assign_client(&mut self, client: &Client) {
        self.client_name.clone_from(&client.client_name);
        self.exchange_name.clone_from(&client.exchange_name);
        self.label.clone_from(&client.label);
        self.pair.clone_from(&client.pair);
    }
}

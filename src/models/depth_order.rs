use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One price level of an order book snapshot. The row id assigned on insert
/// stays inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DepthOrder {
    pub price: f64,
    pub base_qty: f64,
}

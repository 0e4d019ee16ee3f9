use serde::{Deserialize, Serialize};

/// Key that groups order history rows. Deserialized straight from the
/// `/order-history/:client_name/:exchange_name/:label/:pair` path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    pub client_name: String,
    pub exchange_name: String,
    pub label: String,
    pub pair: String,
}

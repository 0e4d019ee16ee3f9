pub use order_history_service::OrderHistoryService;
pub use orderbook_service::OrderBookService;

pub mod order_history_service;
pub mod orderbook_service;

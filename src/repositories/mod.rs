pub mod order_history_repo;
pub mod orderbook_repo;

pub use order_history_repo::OrderHistoryRepository;
pub use orderbook_repo::OrderBookRepository;

pub mod client;
pub mod depth_order;
pub mod history_order;

pub use client::Client;
pub use depth_order::DepthOrder;
pub use history_order::HistoryOrder;

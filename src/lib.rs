pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod router;
pub mod services;

pub use config::{Config, DatabaseConfig};
pub use db::Database;
pub use error::ApiError;
pub use router::{AppState, router};

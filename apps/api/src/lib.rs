#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use config::db::DbConfig;
pub use error::AppError;
pub use errors::domain::DomainError;
pub use infra::db::connect_db;
pub use middleware::request_log::RequestLog;
pub use state::app_state::AppState;

//! Order service for managing customer orders

pub mod service;
pub mod repository;
pub mod config;

pub use service::OrderService;
pub use service::RepositoryType;
pub use repository::{OrderRepository, InMemoryOrderRepository, PostgresOrderRepository};
pub use config::OrderServiceConfig;

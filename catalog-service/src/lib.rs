//! Catalog service for managing the product inventory

pub mod service;
pub mod repository;
pub mod config;

pub use service::CatalogService;
pub use service::RepositoryType;
pub use repository::{ProductRepository, InMemoryProductRepository, PostgresProductRepository};
pub use config::CatalogServiceConfig;

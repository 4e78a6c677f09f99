//! Catalog Server - data-access layer and HTTP API for a
//! content-managed product catalog site
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, server assembly
//! ├── auth/          # Admin bearer-token check
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repository backends
//! └── utils/         # Errors, logging, slugs, validation
//! ```
//!
//! Storage goes through one trait, [`db::repository::CatalogRepository`],
//! with two interchangeable backends: fixture-seeded in-memory arrays
//! and embedded SurrealDB. Which one runs is decided once at startup
//! from configuration.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::AdminSession;
pub use core::{build_router, Config, Server, ServerState, StorageBackend};
pub use db::repository::{CatalogRepository, MemoryRepository, SurrealRepository};
pub use db::{build_repository, DbService};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};

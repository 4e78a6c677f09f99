//! Database Module
//!
//! Owns the embedded SurrealDB connection and the backend selection.
//! The connection is established once at startup and shared
//! process-wide; reconnection is the store client's concern.

pub mod models;
pub mod repository;

use std::path::Path;
use std::sync::Arc;

use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

use crate::core::{Config, StorageBackend};
use crate::utils::AppError;
use repository::{CatalogRepository, MemoryRepository, SurrealRepository};

const NAMESPACE: &str = "catalog";
const DATABASE: &str = "catalog";

/// Database service: owns the embedded SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed store under `data_dir` and
    /// define indexes. Safe to call on every startup.
    pub async fn new(data_dir: &str) -> Result<Self, AppError> {
        let path = Path::new(data_dir).join("catalog.db");
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let service = Self::init(db).await?;
        tracing::info!("Database connection established (SurrealDB RocksDB)");
        Ok(service)
    }

    /// Volatile in-memory engine, used by integration tests.
    pub async fn in_memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        define_indexes(&db)
            .await
            .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
        Ok(Self { db })
    }
}

/// Idempotent index definitions: filter fields, search fields, the
/// compound (category, inStock) pair and the default sort column.
async fn define_indexes(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    db.query(
        "
        DEFINE INDEX IF NOT EXISTS product_category ON TABLE product FIELDS category;
        DEFINE INDEX IF NOT EXISTS product_name ON TABLE product FIELDS name;
        DEFINE INDEX IF NOT EXISTS product_code ON TABLE product FIELDS code;
        DEFINE INDEX IF NOT EXISTS product_category_stock ON TABLE product FIELDS category, inStock;
        DEFINE INDEX IF NOT EXISTS product_created ON TABLE product FIELDS createdAt;
        DEFINE INDEX IF NOT EXISTS product_slug ON TABLE product FIELDS slug;
        ",
    )
    .await?
    .check()?;
    Ok(())
}

/// Construct the backend chosen by configuration. Called once from
/// `main`; the result is injected wherever the contract is consumed.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn CatalogRepository>, AppError> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend (fixture data)");
            Ok(Arc::new(MemoryRepository::with_fixtures()))
        }
        StorageBackend::Persistent => {
            let service = DbService::new(&config.data_dir).await?;
            Ok(Arc::new(SurrealRepository::new(service.db)))
        }
    }
}

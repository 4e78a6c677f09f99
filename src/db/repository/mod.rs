//! Repository Module
//!
//! The storage contract for the catalog and the helpers shared by its
//! backends. Exactly one backend implements the contract per process,
//! chosen at startup and injected as `Arc<dyn CatalogRepository>`.
//!
//! Not-found is a value here (`Option` / `false`), never an error:
//! update and delete report a missing id as a normal no-match outcome.

pub mod bulk;
pub mod memory;
pub mod query;
pub mod stats;
pub mod surreal;

pub use bulk::{run_bulk_delete, BulkOutcome};
pub use memory::MemoryRepository;
pub use query::{PageInfo, PageParams, ProductFilter, ProductQuery, SortKey};
pub use stats::{catalog_stats, CatalogStats, CategoryStats};
pub use surreal::SurrealRepository;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::db::models::{
    Category, CategoryCreate, CategoryUpdate, Client, ClientCreate, ClientUpdate, Enquiry,
    EnquiryCreate, EnquiryUpdate, GalleryItem, GalleryItemCreate, GalleryItemUpdate, PageKey,
    Product, ProductCreate, ProductUpdate, Service, ServiceCreate, ServiceUpdate, Testimonial,
    TestimonialCreate, TestimonialUpdate,
};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Serialization(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage contract for the whole catalog.
///
/// Listing order is insertion order (`created_at` ascending), except
/// clients and gallery items which order by `display_order` first.
/// Bulk deletion and stats are default-implemented so every backend
/// shares one executor and one aggregator.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ========== Products ==========
    async fn products(&self) -> RepoResult<Vec<Product>>;
    async fn product_by_slug(&self, slug: &str) -> RepoResult<Option<Product>>;
    /// Filter + search + sort + paginate in one pass
    async fn filtered_products(&self, query: &ProductQuery) -> RepoResult<Vec<Product>>;
    /// Count of all records matching filter + search, ignoring pagination
    async fn product_count(&self, filter: &ProductFilter, search: Option<&str>)
        -> RepoResult<u64>;
    /// Ids of products whose denormalized category name matches exactly
    async fn product_ids_by_category(&self, category: &str) -> RepoResult<Vec<String>>;
    async fn create_product(&self, data: ProductCreate) -> RepoResult<Product>;
    async fn update_product(&self, id: &str, patch: ProductUpdate)
        -> RepoResult<Option<Product>>;
    async fn delete_product(&self, id: &str) -> RepoResult<bool>;

    // ========== Categories ==========
    async fn categories(&self) -> RepoResult<Vec<Category>>;
    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category>;
    async fn update_category(
        &self,
        id: &str,
        patch: CategoryUpdate,
    ) -> RepoResult<Option<Category>>;
    /// Never cascades: products keep their denormalized category name
    async fn delete_category(&self, id: &str) -> RepoResult<bool>;

    // ========== Clients ==========
    async fn clients(&self) -> RepoResult<Vec<Client>>;
    async fn create_client(&self, data: ClientCreate) -> RepoResult<Client>;
    async fn update_client(&self, id: &str, patch: ClientUpdate) -> RepoResult<Option<Client>>;
    async fn delete_client(&self, id: &str) -> RepoResult<bool>;

    // ========== Gallery ==========
    async fn gallery_items(&self) -> RepoResult<Vec<GalleryItem>>;
    async fn create_gallery_item(&self, data: GalleryItemCreate) -> RepoResult<GalleryItem>;
    async fn update_gallery_item(
        &self,
        id: &str,
        patch: GalleryItemUpdate,
    ) -> RepoResult<Option<GalleryItem>>;
    async fn delete_gallery_item(&self, id: &str) -> RepoResult<bool>;

    // ========== Services ==========
    async fn services(&self) -> RepoResult<Vec<Service>>;
    async fn create_service(&self, data: ServiceCreate) -> RepoResult<Service>;
    async fn update_service(&self, id: &str, patch: ServiceUpdate)
        -> RepoResult<Option<Service>>;
    async fn delete_service(&self, id: &str) -> RepoResult<bool>;

    // ========== Testimonials ==========
    async fn testimonials(&self) -> RepoResult<Vec<Testimonial>>;
    async fn create_testimonial(&self, data: TestimonialCreate) -> RepoResult<Testimonial>;
    async fn update_testimonial(
        &self,
        id: &str,
        patch: TestimonialUpdate,
    ) -> RepoResult<Option<Testimonial>>;
    async fn delete_testimonial(&self, id: &str) -> RepoResult<bool>;

    // ========== Enquiries ==========
    async fn enquiries(&self) -> RepoResult<Vec<Enquiry>>;
    async fn create_enquiry(&self, data: EnquiryCreate) -> RepoResult<Enquiry>;
    async fn update_enquiry(&self, id: &str, patch: EnquiryUpdate)
        -> RepoResult<Option<Enquiry>>;
    async fn delete_enquiry(&self, id: &str) -> RepoResult<bool>;

    // ========== Page content ==========
    /// Whole blob for the page; `{}` when never written
    async fn page_content(&self, page: PageKey) -> RepoResult<Value>;
    /// Merge supplied top-level keys into the stored blob and return it
    async fn update_page_content(&self, page: PageKey, patch: Value) -> RepoResult<Value>;

    // ========== Bulk operations ==========
    /// Delete every id independently; partial failures are reported,
    /// never propagated. Empty input is a validation error.
    async fn bulk_delete_products(&self, ids: &[String]) -> RepoResult<BulkOutcome> {
        run_bulk_delete("product", ids, |id| async move {
            self.delete_product(&id).await
        })
        .await
    }

    /// Resolve the products of a category by denormalized name, then
    /// delegate to the per-item executor. Zero matches short-circuits.
    async fn delete_products_by_category(&self, category: &str) -> RepoResult<BulkOutcome> {
        let ids = self.product_ids_by_category(category).await?;
        if ids.is_empty() {
            return Ok(BulkOutcome::empty(format!(
                "No products found in category {category}"
            )));
        }
        self.bulk_delete_products(&ids).await
    }

    // ========== Stats ==========
    /// Per-category roll-up of product counts and stock split
    async fn stats(&self) -> RepoResult<CatalogStats> {
        let products = self.products().await?;
        let categories = self.categories().await?;
        Ok(catalog_stats(&products, &categories))
    }
}

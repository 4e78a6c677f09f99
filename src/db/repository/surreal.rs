//! SurrealDB Backend
//!
//! Implements the repository contract against the embedded document
//! store. Record keys are the generated uuid ids; reads project
//! `record::id(id)` so records round-trip into the canonical structs.
//! Partial updates are native MERGE operations driven by the
//! serialized patch structs. Single-record atomicity is the store's;
//! nothing here opens multi-document transactions.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::db::models::{
    merge_page_content, Category, CategoryCreate, CategoryUpdate, Client, ClientCreate,
    ClientUpdate, Enquiry, EnquiryCreate, EnquiryUpdate, GalleryItem, GalleryItemCreate,
    GalleryItemUpdate, PageKey, Product, ProductCreate, ProductUpdate, Service, ServiceCreate,
    ServiceUpdate, Testimonial, TestimonialCreate, TestimonialUpdate,
};

use super::query::{ProductFilter, ProductQuery};
use super::{CatalogRepository, RepoError, RepoResult};

const PRODUCT_TABLE: &str = "product";
const CATEGORY_TABLE: &str = "category";
const CLIENT_TABLE: &str = "client";
const GALLERY_TABLE: &str = "gallery_item";
const SERVICE_TABLE: &str = "service";
const TESTIMONIAL_TABLE: &str = "testimonial";
const ENQUIRY_TABLE: &str = "enquiry";
const CONTENT_TABLE: &str = "content";

/// Persistent repository backend over a shared SurrealDB connection
#[derive(Clone)]
pub struct SurrealRepository {
    db: Surreal<Db>,
}

impl SurrealRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    // ========== Generic record helpers ==========

    async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        order_by: &str,
    ) -> RepoResult<Vec<T>> {
        let sql =
            format!("SELECT *, record::id(id) AS id FROM {table} ORDER BY {order_by}");
        let rows: Vec<T> = self.db.query(sql).await?.take(0)?;
        Ok(rows)
    }

    /// Store a record under its own id; the stored copy carries every
    /// field except `id`, which lives in the record key.
    async fn create_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
    ) -> RepoResult<()> {
        let data = content_without_id(record)?;
        let sql = format!("CREATE type::thing('{table}', $id) CONTENT $data RETURN NONE");
        self.db
            .query(sql)
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?
            .check()?;
        Ok(())
    }

    /// MERGE the patch into the record; `None` when the id matched
    /// nothing. An empty patch still returns the record untouched.
    async fn merge_record<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        patch: Value,
    ) -> RepoResult<Option<T>> {
        let sql = format!(
            "UPDATE type::thing('{table}', $id) MERGE $patch RETURN *, record::id(id) AS id"
        );
        let rows: Vec<T> = self
            .db
            .query(sql)
            .bind(("id", id.to_string()))
            .bind(("patch", patch))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    async fn delete_record(&self, table: &str, id: &str) -> RepoResult<bool> {
        let sql = format!("DELETE type::thing('{table}', $id) RETURN BEFORE");
        let removed: Vec<Value> = self
            .db
            .query(sql)
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(!removed.is_empty())
    }

    // ========== Product query translation ==========

    /// WHERE clause shared by the listing query and the count query.
    fn product_conditions(filter: &ProductFilter, search: Option<&str>) -> String {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = $category");
        }
        if filter.in_stock.is_some() {
            conditions.push("inStock = $in_stock");
        }
        if search.is_some() {
            conditions.push(
                "(string::lowercase(name) CONTAINS $term \
                 OR string::lowercase(code ?? '') CONTAINS $term \
                 OR string::lowercase(description ?? '') CONTAINS $term)",
            );
        }
        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }

    fn bind_product_conditions<'a>(
        mut query: surrealdb::method::Query<'a, Db>,
        filter: &ProductFilter,
        search: Option<&str>,
    ) -> surrealdb::method::Query<'a, Db> {
        if let Some(category) = &filter.category {
            query = query.bind(("category", category.clone()));
        }
        if let Some(in_stock) = filter.in_stock {
            query = query.bind(("in_stock", in_stock));
        }
        if let Some(term) = search {
            query = query.bind(("term", term.to_lowercase()));
        }
        query
    }
}

fn content_without_id<T: Serialize>(record: &T) -> RepoResult<Value> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.remove("id");
    }
    Ok(value)
}

fn to_patch<T: Serialize>(patch: &T) -> RepoResult<Value> {
    let value = serde_json::to_value(patch)?;
    match value {
        Value::Object(_) => Ok(value),
        _ => Err(RepoError::Serialization("patch must be an object".into())),
    }
}

impl super::query::SortKey {
    /// Native ORDER BY clause with identical semantics to the
    /// in-memory sort.
    fn order_clause(&self) -> &'static str {
        match self {
            Self::Newest => "createdAt DESC",
            Self::Oldest => "createdAt ASC",
            Self::NameAsc => "name COLLATE ASC",
            Self::NameDesc => "name COLLATE DESC",
        }
    }
}

#[async_trait]
impl CatalogRepository for SurrealRepository {
    // ========== Products ==========

    async fn products(&self) -> RepoResult<Vec<Product>> {
        self.select_all(PRODUCT_TABLE, "createdAt ASC").await
    }

    async fn product_by_slug(&self, slug: &str) -> RepoResult<Option<Product>> {
        let rows: Vec<Product> = self
            .db
            .query(
                "SELECT *, record::id(id) AS id FROM product \
                 WHERE slug = $slug ORDER BY createdAt ASC LIMIT 1",
            )
            .bind(("slug", slug.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    async fn filtered_products(&self, query: &ProductQuery) -> RepoResult<Vec<Product>> {
        let conditions = Self::product_conditions(&query.filter, query.search.as_deref());
        let sql = format!(
            "SELECT *, record::id(id) AS id FROM product{conditions} \
             ORDER BY {} LIMIT $limit START $skip",
            query.sort.order_clause()
        );
        let q = self
            .db
            .query(sql)
            .bind(("limit", query.page.limit as i64))
            .bind(("skip", query.page.skip() as i64));
        let q = Self::bind_product_conditions(q, &query.filter, query.search.as_deref());
        let rows: Vec<Product> = q.await?.take(0)?;
        Ok(rows)
    }

    async fn product_count(
        &self,
        filter: &ProductFilter,
        search: Option<&str>,
    ) -> RepoResult<u64> {
        #[derive(serde::Deserialize)]
        struct CountRow {
            count: u64,
        }

        let conditions = Self::product_conditions(filter, search);
        let sql = format!("SELECT count() AS count FROM product{conditions} GROUP ALL");
        let q = Self::bind_product_conditions(self.db.query(sql), filter, search);
        let row: Option<CountRow> = q.await?.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn product_ids_by_category(&self, category: &str) -> RepoResult<Vec<String>> {
        let ids: Vec<String> = self
            .db
            .query("SELECT VALUE record::id(id) FROM product WHERE category = $category")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(ids)
    }

    async fn create_product(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product::create(data);
        self.create_record(PRODUCT_TABLE, &product.id, &product)
            .await?;
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &str,
        patch: ProductUpdate,
    ) -> RepoResult<Option<Product>> {
        let mut value = to_patch(&patch)?;
        if let Value::Object(map) = &mut value {
            // Every successful update touches updatedAt
            map.insert("updatedAt".into(), serde_json::to_value(chrono::Utc::now())?);
        }
        self.merge_record(PRODUCT_TABLE, id, value).await
    }

    async fn delete_product(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(PRODUCT_TABLE, id).await
    }

    // ========== Categories ==========

    async fn categories(&self) -> RepoResult<Vec<Category>> {
        self.select_all(CATEGORY_TABLE, "createdAt ASC").await
    }

    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category> {
        let category = Category::create(data);
        self.create_record(CATEGORY_TABLE, &category.id, &category)
            .await?;
        Ok(category)
    }

    async fn update_category(
        &self,
        id: &str,
        patch: CategoryUpdate,
    ) -> RepoResult<Option<Category>> {
        self.merge_record(CATEGORY_TABLE, id, to_patch(&patch)?).await
    }

    async fn delete_category(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(CATEGORY_TABLE, id).await
    }

    // ========== Clients ==========

    async fn clients(&self) -> RepoResult<Vec<Client>> {
        self.select_all(CLIENT_TABLE, "displayOrder ASC, createdAt ASC")
            .await
    }

    async fn create_client(&self, data: ClientCreate) -> RepoResult<Client> {
        let client = Client::create(data);
        self.create_record(CLIENT_TABLE, &client.id, &client).await?;
        Ok(client)
    }

    async fn update_client(&self, id: &str, patch: ClientUpdate) -> RepoResult<Option<Client>> {
        self.merge_record(CLIENT_TABLE, id, to_patch(&patch)?).await
    }

    async fn delete_client(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(CLIENT_TABLE, id).await
    }

    // ========== Gallery ==========

    async fn gallery_items(&self) -> RepoResult<Vec<GalleryItem>> {
        self.select_all(GALLERY_TABLE, "displayOrder ASC, createdAt ASC")
            .await
    }

    async fn create_gallery_item(&self, data: GalleryItemCreate) -> RepoResult<GalleryItem> {
        let item = GalleryItem::create(data);
        self.create_record(GALLERY_TABLE, &item.id, &item).await?;
        Ok(item)
    }

    async fn update_gallery_item(
        &self,
        id: &str,
        patch: GalleryItemUpdate,
    ) -> RepoResult<Option<GalleryItem>> {
        self.merge_record(GALLERY_TABLE, id, to_patch(&patch)?).await
    }

    async fn delete_gallery_item(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(GALLERY_TABLE, id).await
    }

    // ========== Services ==========

    async fn services(&self) -> RepoResult<Vec<Service>> {
        self.select_all(SERVICE_TABLE, "createdAt ASC").await
    }

    async fn create_service(&self, data: ServiceCreate) -> RepoResult<Service> {
        let service = Service::create(data);
        self.create_record(SERVICE_TABLE, &service.id, &service)
            .await?;
        Ok(service)
    }

    async fn update_service(
        &self,
        id: &str,
        patch: ServiceUpdate,
    ) -> RepoResult<Option<Service>> {
        self.merge_record(SERVICE_TABLE, id, to_patch(&patch)?).await
    }

    async fn delete_service(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(SERVICE_TABLE, id).await
    }

    // ========== Testimonials ==========

    async fn testimonials(&self) -> RepoResult<Vec<Testimonial>> {
        self.select_all(TESTIMONIAL_TABLE, "createdAt ASC").await
    }

    async fn create_testimonial(&self, data: TestimonialCreate) -> RepoResult<Testimonial> {
        let testimonial = Testimonial::create(data);
        self.create_record(TESTIMONIAL_TABLE, &testimonial.id, &testimonial)
            .await?;
        Ok(testimonial)
    }

    async fn update_testimonial(
        &self,
        id: &str,
        patch: TestimonialUpdate,
    ) -> RepoResult<Option<Testimonial>> {
        self.merge_record(TESTIMONIAL_TABLE, id, to_patch(&patch)?)
            .await
    }

    async fn delete_testimonial(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(TESTIMONIAL_TABLE, id).await
    }

    // ========== Enquiries ==========

    async fn enquiries(&self) -> RepoResult<Vec<Enquiry>> {
        self.select_all(ENQUIRY_TABLE, "createdAt ASC").await
    }

    async fn create_enquiry(&self, data: EnquiryCreate) -> RepoResult<Enquiry> {
        let enquiry = Enquiry::create(data);
        self.create_record(ENQUIRY_TABLE, &enquiry.id, &enquiry)
            .await?;
        Ok(enquiry)
    }

    async fn update_enquiry(
        &self,
        id: &str,
        patch: EnquiryUpdate,
    ) -> RepoResult<Option<Enquiry>> {
        self.merge_record(ENQUIRY_TABLE, id, to_patch(&patch)?).await
    }

    async fn delete_enquiry(&self, id: &str) -> RepoResult<bool> {
        self.delete_record(ENQUIRY_TABLE, id).await
    }

    // ========== Page content ==========

    async fn page_content(&self, page: PageKey) -> RepoResult<Value> {
        let rows: Vec<Value> = self
            .db
            .query("SELECT VALUE data FROM type::thing('content', $page)")
            .bind(("page", page.as_str()))
            .await?
            .take(0)?;
        Ok(rows
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Object(Map::new())))
    }

    async fn update_page_content(&self, page: PageKey, patch: Value) -> RepoResult<Value> {
        let existing = self.page_content(page).await?;
        let merged = merge_page_content(existing, patch);
        self.db
            .query(format!(
                "UPSERT type::thing('{CONTENT_TABLE}', $page) SET data = $data RETURN NONE"
            ))
            .bind(("page", page.as_str()))
            .bind(("data", merged.clone()))
            .await?
            .check()?;
        Ok(merged)
    }
}

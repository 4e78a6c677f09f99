//! In-Memory Backend
//!
//! Process-lifetime containers implementing the repository contract,
//! seeded from fixture data at construction. Used for development and
//! tests; everything is lost on restart. The layer assumes no
//! concurrent mutation, the lock only satisfies the `Send + Sync`
//! bound of the contract.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{json, Value};

use crate::db::models::{
    merge_page_content, Category, CategoryCreate, CategoryUpdate, Client, ClientCreate,
    ClientUpdate, Enquiry, EnquiryCreate, EnquiryUpdate, GalleryItem, GalleryItemCreate,
    GalleryItemUpdate, PageKey, Product, ProductCreate, ProductUpdate, Service, ServiceCreate,
    ServiceUpdate, Testimonial, TestimonialCreate, TestimonialUpdate,
};

use super::query::{paginate, search_matches, sort_products, ProductFilter, ProductQuery};
use super::{CatalogRepository, RepoResult};

/// Entities addressable by id inside the store
trait HasId {
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),+) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_has_id!(Product, Category, Client, GalleryItem, Service, Testimonial, Enquiry);

fn update_in<T: HasId + Clone>(
    items: &mut [T],
    id: &str,
    apply: impl FnOnce(&mut T),
) -> Option<T> {
    let item = items.iter_mut().find(|item| item.id() == id)?;
    apply(item);
    Some(item.clone())
}

fn delete_in<T: HasId>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() < before
}

/// Stable sort by display order, insertion order on ties
fn by_display_order<T: Clone>(items: &[T], order: impl Fn(&T) -> i64) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| order(item));
    sorted
}

#[derive(Default)]
struct Store {
    products: Vec<Product>,
    categories: Vec<Category>,
    clients: Vec<Client>,
    gallery: Vec<GalleryItem>,
    services: Vec<Service>,
    testimonials: Vec<Testimonial>,
    enquiries: Vec<Enquiry>,
    content: HashMap<PageKey, Value>,
}

/// In-memory repository backend
pub struct MemoryRepository {
    store: RwLock<Store>,
}

impl MemoryRepository {
    /// Empty store, used by tests that control their own data.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    /// Store seeded with demo catalog data, populated once here.
    pub fn with_fixtures() -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for name in ["Screens", "Crushers", "Conveyors"] {
                store.categories.push(Category::create(CategoryCreate {
                    name: name.into(),
                    slug: None,
                    description: Some(format!("{name} for aggregate processing")),
                    icon: None,
                    image: None,
                }));
            }
            let fixtures = [
                ("Vibrating Screen X1", "Screens", "VS-X1", true, true),
                ("Dewatering Screen D4", "Screens", "DS-D4", true, false),
                ("Jaw Crusher J120", "Crushers", "JC-120", true, true),
                ("Cone Crusher C45", "Crushers", "CC-45", false, false),
                ("Belt Conveyor B800", "Conveyors", "BC-800", true, false),
            ];
            for (name, category, code, in_stock, featured) in fixtures {
                store.products.push(Product::create(ProductCreate {
                    name: name.into(),
                    slug: None,
                    description: Some(format!("{name} heavy-duty unit")),
                    code: Some(code.into()),
                    category: Some(category.into()),
                    category_id: None,
                    image: None,
                    in_stock: Some(in_stock),
                    featured: Some(featured),
                    capacity: Some("200 t/h".into()),
                    power: Some("37 kW".into()),
                    dimensions: None,
                }));
            }
            store.content.insert(
                PageKey::Home,
                json!({
                    "hero": {
                        "title": "Process more, downtime less",
                        "subtitle": "Screening and crushing equipment"
                    }
                }),
            );
        }
        repo
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for MemoryRepository {
    // ========== Products ==========

    async fn products(&self) -> RepoResult<Vec<Product>> {
        Ok(self.store.read().products.clone())
    }

    async fn product_by_slug(&self, slug: &str) -> RepoResult<Option<Product>> {
        Ok(self
            .store
            .read()
            .products
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn filtered_products(&self, query: &ProductQuery) -> RepoResult<Vec<Product>> {
        let store = self.store.read();
        let mut matched: Vec<Product> = store
            .products
            .iter()
            .filter(|p| query.filter.matches(p))
            .filter(|p| {
                query
                    .search
                    .as_deref()
                    .map(|term| search_matches(p, term))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        drop(store);

        sort_products(&mut matched, query.sort);
        Ok(paginate(matched, &query.page))
    }

    async fn product_count(
        &self,
        filter: &ProductFilter,
        search: Option<&str>,
    ) -> RepoResult<u64> {
        let count = self
            .store
            .read()
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .filter(|p| search.map(|term| search_matches(p, term)).unwrap_or(true))
            .count();
        Ok(count as u64)
    }

    async fn product_ids_by_category(&self, category: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .store
            .read()
            .products
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .map(|p| p.id.clone())
            .collect())
    }

    async fn create_product(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product::create(data);
        self.store.write().products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &str,
        patch: ProductUpdate,
    ) -> RepoResult<Option<Product>> {
        Ok(update_in(&mut self.store.write().products, id, |p| {
            patch.apply_to(p)
        }))
    }

    async fn delete_product(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().products, id))
    }

    // ========== Categories ==========

    async fn categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.store.read().categories.clone())
    }

    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category> {
        let category = Category::create(data);
        self.store.write().categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: &str,
        patch: CategoryUpdate,
    ) -> RepoResult<Option<Category>> {
        Ok(update_in(&mut self.store.write().categories, id, |c| {
            patch.apply_to(c)
        }))
    }

    async fn delete_category(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().categories, id))
    }

    // ========== Clients ==========

    async fn clients(&self) -> RepoResult<Vec<Client>> {
        Ok(by_display_order(&self.store.read().clients, |c| {
            c.display_order
        }))
    }

    async fn create_client(&self, data: ClientCreate) -> RepoResult<Client> {
        let client = Client::create(data);
        self.store.write().clients.push(client.clone());
        Ok(client)
    }

    async fn update_client(&self, id: &str, patch: ClientUpdate) -> RepoResult<Option<Client>> {
        Ok(update_in(&mut self.store.write().clients, id, |c| {
            patch.apply_to(c)
        }))
    }

    async fn delete_client(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().clients, id))
    }

    // ========== Gallery ==========

    async fn gallery_items(&self) -> RepoResult<Vec<GalleryItem>> {
        Ok(by_display_order(&self.store.read().gallery, |g| {
            g.display_order
        }))
    }

    async fn create_gallery_item(&self, data: GalleryItemCreate) -> RepoResult<GalleryItem> {
        let item = GalleryItem::create(data);
        self.store.write().gallery.push(item.clone());
        Ok(item)
    }

    async fn update_gallery_item(
        &self,
        id: &str,
        patch: GalleryItemUpdate,
    ) -> RepoResult<Option<GalleryItem>> {
        Ok(update_in(&mut self.store.write().gallery, id, |g| {
            patch.apply_to(g)
        }))
    }

    async fn delete_gallery_item(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().gallery, id))
    }

    // ========== Services ==========

    async fn services(&self) -> RepoResult<Vec<Service>> {
        Ok(self.store.read().services.clone())
    }

    async fn create_service(&self, data: ServiceCreate) -> RepoResult<Service> {
        let service = Service::create(data);
        self.store.write().services.push(service.clone());
        Ok(service)
    }

    async fn update_service(
        &self,
        id: &str,
        patch: ServiceUpdate,
    ) -> RepoResult<Option<Service>> {
        Ok(update_in(&mut self.store.write().services, id, |s| {
            patch.apply_to(s)
        }))
    }

    async fn delete_service(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().services, id))
    }

    // ========== Testimonials ==========

    async fn testimonials(&self) -> RepoResult<Vec<Testimonial>> {
        Ok(self.store.read().testimonials.clone())
    }

    async fn create_testimonial(&self, data: TestimonialCreate) -> RepoResult<Testimonial> {
        let testimonial = Testimonial::create(data);
        self.store.write().testimonials.push(testimonial.clone());
        Ok(testimonial)
    }

    async fn update_testimonial(
        &self,
        id: &str,
        patch: TestimonialUpdate,
    ) -> RepoResult<Option<Testimonial>> {
        Ok(update_in(&mut self.store.write().testimonials, id, |t| {
            patch.apply_to(t)
        }))
    }

    async fn delete_testimonial(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().testimonials, id))
    }

    // ========== Enquiries ==========

    async fn enquiries(&self) -> RepoResult<Vec<Enquiry>> {
        Ok(self.store.read().enquiries.clone())
    }

    async fn create_enquiry(&self, data: EnquiryCreate) -> RepoResult<Enquiry> {
        let enquiry = Enquiry::create(data);
        self.store.write().enquiries.push(enquiry.clone());
        Ok(enquiry)
    }

    async fn update_enquiry(
        &self,
        id: &str,
        patch: EnquiryUpdate,
    ) -> RepoResult<Option<Enquiry>> {
        Ok(update_in(&mut self.store.write().enquiries, id, |e| {
            patch.apply_to(e)
        }))
    }

    async fn delete_enquiry(&self, id: &str) -> RepoResult<bool> {
        Ok(delete_in(&mut self.store.write().enquiries, id))
    }

    // ========== Page content ==========

    async fn page_content(&self, page: PageKey) -> RepoResult<Value> {
        Ok(self
            .store
            .read()
            .content
            .get(&page)
            .cloned()
            .unwrap_or_else(|| json!({})))
    }

    async fn update_page_content(&self, page: PageKey, patch: Value) -> RepoResult<Value> {
        let mut store = self.store.write();
        let existing = store.content.remove(&page).unwrap_or_else(|| json!({}));
        let merged = merge_page_content(existing, patch);
        store.content.insert(page, merged.clone());
        Ok(merged)
    }
}

//! Product API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::{
    query::parse_in_stock, BulkOutcome, PageInfo, PageParams, ProductFilter, ProductQuery,
    SortKey,
};
use crate::utils::{validation, AppError, AppResult};

/// Raw listing query parameters. Everything arrives as strings and is
/// coerced, never rejected: bad page/limit fall back to defaults, an
/// unrecognized inStock value means unconstrained.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub in_stock: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProductListParams {
    fn into_query(self) -> ProductQuery {
        ProductQuery {
            filter: ProductFilter {
                category: self.category.filter(|c| !c.is_empty()),
                in_stock: parse_in_stock(self.in_stock.as_deref()),
            },
            search: self.search.filter(|s| !s.trim().is_empty()),
            sort: SortKey::parse(self.sort.as_deref()),
            page: PageParams::from_raw(self.page.as_deref(), self.limit.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: PageInfo,
}

/// GET /api/products - filtered, searched, sorted, paginated listing
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<ProductListResponse>> {
    let query = params.into_query();
    let products = state.repo.filtered_products(&query).await?;
    let total = state
        .repo
        .product_count(&query.filter, query.search.as_deref())
        .await?;
    let pagination = PageInfo::new(&query.page, total, products.len());
    Ok(Json(ProductListResponse {
        products,
        pagination,
    }))
}

/// GET /api/products/slug/{slug}
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .repo
        .product_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {slug}")))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validation::check(&payload)?;
    let product = state.repo.create_product(payload).await?;
    tracing::info!(id = %product.id, slug = %product.slug, "Product created");
    Ok(Json(product))
}

/// PUT /api/products/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    validation::check(&payload)?;
    let product = state
        .repo
        .update_product(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_product(&id).await? {
        return Err(AppError::not_found(format!("Product {id}")));
    }
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: BulkOutcome,
}

/// POST /api/products/bulk-delete - independent per-id outcomes, no
/// rollback; an empty id list is rejected before anything runs
pub async fn bulk_delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let outcome = state.repo.bulk_delete_products(&payload.ids).await?;
    tracing::info!(
        deleted = outcome.deleted,
        failed = outcome.failed,
        "Bulk product delete completed"
    );
    Ok(Json(BulkDeleteResponse {
        success: true,
        outcome,
    }))
}

/// DELETE /api/products/by-category/{name}
pub async fn delete_by_category(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let outcome = state.repo.delete_products_by_category(&name).await?;
    Ok(Json(BulkDeleteResponse {
        success: true,
        outcome,
    }))
}

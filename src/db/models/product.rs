//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::slugify;

use super::new_id;

/// Product model
///
/// `category` is the denormalized category name used by filtering and
/// stats; `category_id` is the optional reference to [`super::Category`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Secondary catalog identifier, searched alongside name/description
    #[serde(default)]
    pub code: Option<String>,
    /// Denormalized category name
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    // Free-form specification fields
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Build a stored record from create input: assigns the id, derives
    /// the slug from the name unless supplied, stamps timestamps.
    pub fn create(data: ProductCreate) -> Self {
        let now = Utc::now();
        let slug = data
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&data.name));
        Self {
            id: new_id(),
            name: data.name,
            slug,
            description: data.description,
            code: data.code,
            category: data.category,
            category_id: data.category_id,
            image: data.image,
            in_stock: data.in_stock.unwrap_or(true),
            featured: data.featured.unwrap_or(false),
            capacity: data.capacity,
            power: data.power,
            dimensions: data.dimensions,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub capacity: Option<String>,
    pub power: Option<String>,
    pub dimensions: Option<String>,
}

/// Partial update: a supplied field replaces the stored value, an
/// absent field is untouched. Serialized form doubles as the
/// persistent backend's MERGE payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl ProductUpdate {
    /// Merge supplied fields into `product` and touch `updated_at`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(v) = &self.name {
            product.name = v.clone();
        }
        if let Some(v) = &self.slug {
            product.slug = v.clone();
        }
        if let Some(v) = &self.description {
            product.description = Some(v.clone());
        }
        if let Some(v) = &self.code {
            product.code = Some(v.clone());
        }
        if let Some(v) = &self.category {
            product.category = Some(v.clone());
        }
        if let Some(v) = &self.category_id {
            product.category_id = Some(v.clone());
        }
        if let Some(v) = &self.image {
            product.image = Some(v.clone());
        }
        if let Some(v) = self.in_stock {
            product.in_stock = v;
        }
        if let Some(v) = self.featured {
            product.featured = v;
        }
        if let Some(v) = &self.capacity {
            product.capacity = Some(v.clone());
        }
        if let Some(v) = &self.power {
            product.power = Some(v.clone());
        }
        if let Some(v) = &self.dimensions {
            product.dimensions = Some(v.clone());
        }
        product.updated_at = Utc::now();
    }
}

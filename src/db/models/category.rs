//! Category Model
//!
//! Referenced by `Product.category_id`; never cascading-deleted. A
//! deleted category leaves the products' denormalized `category` name
//! behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::slugify;

use super::new_id;

/// Category model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn create(data: CategoryCreate) -> Self {
        let slug = data
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&data.name));
        Self {
            id: new_id(),
            name: data.name,
            slug,
            description: data.description,
            icon: data.icon,
            image: data.image,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CategoryUpdate {
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(v) = &self.name {
            category.name = v.clone();
        }
        if let Some(v) = &self.slug {
            category.slug = v.clone();
        }
        if let Some(v) = &self.description {
            category.description = Some(v.clone());
        }
        if let Some(v) = &self.icon {
            category.icon = Some(v.clone());
        }
        if let Some(v) = &self.image {
            category.image = Some(v.clone());
        }
    }
}

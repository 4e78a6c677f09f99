//! Gallery Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_id;

/// Gallery entry. Same ordering rule as clients: `display_order`
/// ascending, insertion order on ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn create(data: GalleryItemCreate) -> Self {
        Self {
            id: new_id(),
            name: data.name,
            image: data.image,
            display_order: data.display_order.unwrap_or(0),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub image: Option<String>,
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl GalleryItemUpdate {
    pub fn apply_to(&self, item: &mut GalleryItem) {
        if let Some(v) = &self.name {
            item.name = v.clone();
        }
        if let Some(v) = &self.image {
            item.image = Some(v.clone());
        }
        if let Some(v) = self.display_order {
            item.display_order = v;
        }
    }
}

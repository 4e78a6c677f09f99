//! Service Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::slugify;

use super::new_id;

/// Service offering. Slug derives from the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Short-form text used on listing cards
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn create(data: ServiceCreate) -> Self {
        let slug = data
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&data.title));
        Self {
            id: new_id(),
            title: data.title,
            slug,
            description: data.description,
            summary: data.summary,
            icon: data.icon,
            image: data.image,
            featured: data.featured.unwrap_or(false),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ServiceUpdate {
    pub fn apply_to(&self, service: &mut Service) {
        if let Some(v) = &self.title {
            service.title = v.clone();
        }
        if let Some(v) = &self.slug {
            service.slug = v.clone();
        }
        if let Some(v) = &self.description {
            service.description = Some(v.clone());
        }
        if let Some(v) = &self.summary {
            service.summary = Some(v.clone());
        }
        if let Some(v) = &self.icon {
            service.icon = Some(v.clone());
        }
        if let Some(v) = &self.image {
            service.image = Some(v.clone());
        }
        if let Some(v) = self.featured {
            service.featured = v;
        }
    }
}

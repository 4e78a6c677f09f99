//! Testimonial Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_id;

/// Customer testimonial. Rating falls back to 5 when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    /// 1-5
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

fn default_rating() -> i32 {
    5
}

impl Testimonial {
    pub fn create(data: TestimonialCreate) -> Self {
        Self {
            id: new_id(),
            name: data.name,
            title: data.title,
            company: data.company,
            content: data.content,
            rating: data.rating.unwrap_or(5),
            featured: data.featured.unwrap_or(false),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl TestimonialUpdate {
    pub fn apply_to(&self, testimonial: &mut Testimonial) {
        if let Some(v) = &self.name {
            testimonial.name = v.clone();
        }
        if let Some(v) = &self.title {
            testimonial.title = Some(v.clone());
        }
        if let Some(v) = &self.company {
            testimonial.company = Some(v.clone());
        }
        if let Some(v) = &self.content {
            testimonial.content = v.clone();
        }
        if let Some(v) = self.rating {
            testimonial.rating = v;
        }
        if let Some(v) = self.featured {
            testimonial.featured = v;
        }
    }
}

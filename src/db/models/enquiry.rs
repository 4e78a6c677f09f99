//! Enquiry Model
//!
//! Status transitions are caller-directed; nothing beyond the
//! three-value enum is enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_id;

/// Enquiry kind, set by the originating form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryType {
    General,
    Product,
    GeneralProduct,
    Bulk,
    Service,
}

/// Processing status, defaults to pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    Resolved,
}

/// Enquiry model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,
    #[serde(rename = "type")]
    pub enquiry_type: EnquiryType,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Product the enquiry refers to, when raised from a product page
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn create(data: EnquiryCreate) -> Self {
        Self {
            id: new_id(),
            enquiry_type: data.enquiry_type,
            name: data.name,
            email: data.email,
            phone: data.phone,
            company: data.company,
            message: data.message,
            product: data.product,
            status: EnquiryStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryCreate {
    #[serde(rename = "type")]
    pub enquiry_type: EnquiryType,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub product: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnquiryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EnquiryUpdate {
    pub fn apply_to(&self, enquiry: &mut Enquiry) {
        if let Some(v) = self.status {
            enquiry.status = v;
        }
        if let Some(v) = &self.message {
            enquiry.message = Some(v.clone());
        }
    }
}

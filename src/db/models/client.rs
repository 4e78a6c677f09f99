//! Client Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_id;

/// Client (logo wall entry). Listings order by `display_order`
/// ascending, ties broken by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn create(data: ClientCreate) -> Self {
        Self {
            id: new_id(),
            name: data.name,
            logo: data.logo,
            display_order: data.display_order.unwrap_or(0),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub logo: Option<String>,
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl ClientUpdate {
    pub fn apply_to(&self, client: &mut Client) {
        if let Some(v) = &self.name {
            client.name = v.clone();
        }
        if let Some(v) = &self.logo {
            client.logo = Some(v.clone());
        }
        if let Some(v) = self.display_order {
            client.display_order = v;
        }
    }
}

//! Storefront User Model

use serde::{Deserialize, Serialize};

/// Registered storefront customer, as listed in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Blocked users cannot log in or place orders
    #[serde(default)]
    pub is_blocked: bool,
}

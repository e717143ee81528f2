//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Whether the category is offered on the storefront
    #[serde(default)]
    pub enabled: bool,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Update category payload (toggle availability)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub enabled: bool,
}

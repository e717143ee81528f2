//! Client-related types shared between the admin shell and the API client
//!
//! Request/response DTOs for the auth endpoints. These mirror the JSON
//! the storefront API speaks, so field renames live here and nowhere else.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

/// Current user response (`GET /auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AdminProfile {
    /// Whether this account may use the admin dashboard
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

//! Gilt Client - HTTP client for the storefront admin API
//!
//! Typed, bearer-token-authenticated calls for every endpoint the admin
//! dashboard uses. The client does not retry, queue, or rate-limit;
//! transport failures surface as opaque [`ClientError`] values and the
//! operator retries at their own discretion.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{AdminProfile, LoginRequest, LoginResponse};

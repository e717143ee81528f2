//! Dashboard Statistics Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate storefront counters shown on the dashboard landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_orders: u64,
    pub total_products: u64,
    pub total_revenue: Decimal,
    pub total_users: u64,
}

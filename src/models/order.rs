use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An order aggregated from a third-party delivery platform, normalized into
/// a common shape and tagged with its owning vendor. Immutable once stored.
///
/// `platform` and `status` stay open-set strings: upstream platforms are an
/// open universe and filter matching is exact and case-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: String,
    pub vendor_id: String,
    #[schema(example = "Zomato")]
    pub platform: String,
    #[schema(example = "Z-1001")]
    pub external_order_id: String,
    #[schema(example = "Aman")]
    pub customer: String,
    #[schema(example = "9999000001")]
    pub phone: String,
    #[schema(example = 250.0)]
    pub amount: f64,
    #[schema(example = "NEW")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Ingestion payload. Stands in for a future platform-webhook pipeline, so
/// fields beyond identity assignment are accepted as-is.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub vendor_id: String,
    #[serde(default)]
    #[schema(example = "Zomato")]
    pub platform: String,
    #[serde(default)]
    #[schema(example = "Z-1001")]
    pub external_order_id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    #[schema(example = "NEW")]
    pub status: String,
}

/// Optional, conjunctive order filters.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderQuery {
    pub platform: Option<String>,
    pub status: Option<String>,
    /// Free-text: case-insensitive substring over external order id or customer.
    pub q: Option<String>,
}

use crate::models::{CreateOrderRequest, Order, OrderQuery};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Order aggregate store and query engine. Orders from every upstream
/// platform land here tagged with their owning vendor; queries are always
/// scoped to a single vendor first, then filtered.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderService {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append an ingested order, assigning a fresh identity and creation
    /// timestamp. No further field validation in this stand-in ingestion
    /// path.
    pub async fn insert(&self, request: CreateOrderRequest) -> Order {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            vendor_id: request.vendor_id,
            platform: request.platform,
            external_order_id: request.external_order_id,
            customer: request.customer,
            phone: request.phone,
            amount: request.amount,
            status: request.status,
            created_at: Utc::now(),
        };

        let mut orders = self.orders.write().await;
        orders.push(order.clone());
        log::info!(
            "Stored order {} for vendor {} from {}",
            order.id,
            order.vendor_id,
            order.platform
        );
        order
    }

    /// Return `vendor_id`'s orders matching the given filters, in insertion
    /// order.
    ///
    /// Tenant isolation comes first: the result set is restricted to the
    /// owning vendor before any filter applies, so no filter combination can
    /// widen visibility. Remaining filters are conjunctive; the free-text
    /// filter alone matches either the external order id or the customer
    /// name, case-insensitively.
    pub async fn query(&self, vendor_id: &str, filters: &OrderQuery) -> Vec<Order> {
        let orders = self.orders.read().await;
        orders
            .iter()
            .filter(|o| o.vendor_id == vendor_id)
            .filter(|o| {
                filters
                    .platform
                    .as_ref()
                    .is_none_or(|p| o.platform == *p)
            })
            .filter(|o| filters.status.as_ref().is_none_or(|s| o.status == *s))
            .filter(|o| {
                filters.q.as_ref().is_none_or(|q| {
                    let needle = q.to_lowercase();
                    o.external_order_id.to_lowercase().contains(&needle)
                        || o.customer.to_lowercase().contains(&needle)
                })
            })
            .cloned()
            .collect()
    }
}

use crate::models::Vendor;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Vendor directory: source of truth for "who is this session". In-memory
/// for now; every access goes through the lock so concurrent requests never
/// observe a half-written entry.
#[derive(Clone)]
pub struct VendorService {
    vendors: Arc<RwLock<Vec<Vendor>>>,
}

impl Default for VendorService {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorService {
    pub fn new() -> Self {
        Self {
            vendors: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn find_by_phone(&self, phone: &str) -> Option<Vendor> {
        let vendors = self.vendors.read().await;
        vendors.iter().find(|v| v.phone == phone).cloned()
    }

    /// Look up the vendor for `phone`, creating one with a fresh identity and
    /// a placeholder name if none exists. This is the sole vendor-creation
    /// path (implicit signup on first verified login) and must only be called
    /// after a successful challenge verification.
    pub async fn get_or_create(&self, phone: &str) -> Vendor {
        let mut vendors = self.vendors.write().await;
        if let Some(vendor) = vendors.iter().find(|v| v.phone == phone) {
            return vendor.clone();
        }

        let vendor = Vendor {
            id: Uuid::new_v4().to_string(),
            name: "New Vendor".to_string(),
            phone: phone.to_string(),
        };
        vendors.push(vendor.clone());
        log::info!("Created vendor {} for phone {}", vendor.id, phone);
        vendor
    }

    /// Returns `None` for unknown ids, including stale or forged token
    /// subjects referencing a vendor that no longer exists.
    pub async fn get_by_id(&self, id: &str) -> Option<Vendor> {
        let vendors = self.vendors.read().await;
        vendors.iter().find(|v| v.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_or_create_is_idempotent_on_identity() {
        let service = VendorService::new();

        let first = service.get_or_create("9876543210").await;
        let second = service.get_or_create("9876543210").await;

        assert_eq!(first.id, second.id);
        assert_eq!(first.phone, "9876543210");
    }

    #[tokio::test]
    async fn test_distinct_phones_get_distinct_identities() {
        let service = VendorService::new();

        let a = service.get_or_create("1110000001").await;
        let b = service.get_or_create("1110000002").await;

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_by_phone() {
        let service = VendorService::new();
        assert!(service.find_by_phone("9876543210").await.is_none());

        let created = service.get_or_create("9876543210").await;
        let found = service.find_by_phone("9876543210").await.unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_returns_none() {
        let service = VendorService::new();
        assert!(service.get_by_id("no-such-vendor").await.is_none());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A restaurant vendor. Created implicitly on first verified OTP login;
/// `id` is immutable once assigned and `phone` is unique in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Vendor {
    pub id: String,
    #[schema(example = "New Vendor")]
    pub name: String,
    #[schema(example = "9876543210")]
    pub phone: String,
}

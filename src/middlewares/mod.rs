pub mod auth;
pub mod cors;

pub use auth::{AuthMiddleware, AuthVendorId};
pub use cors::create_cors;

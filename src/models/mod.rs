pub mod auth;
pub mod order;
pub mod vendor;

pub use auth::*;
pub use order::*;
pub use vendor::*;

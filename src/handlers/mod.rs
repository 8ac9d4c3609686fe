pub mod auth;
pub mod health;
pub mod order;
pub mod user;

pub use auth::auth_config;
pub use health::health_config;
pub use order::order_config;
pub use user::user_config;

use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::auth::send_otp,
        handlers::auth::verify_otp,
        handlers::user::get_profile,
        handlers::order::list_orders,
        handlers::order::create_order,
    ),
    components(
        schemas(
            Vendor,
            Order,
            OrderQuery,
            CreateOrderRequest,
            SendOtpRequest,
            VerifyOtpRequest,
            AuthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Phone OTP login and session issuance"),
        (name = "user", description = "Vendor profile"),
        (name = "order", description = "Aggregated order queries and ingestion"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

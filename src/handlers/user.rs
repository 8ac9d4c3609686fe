use crate::middlewares::AuthVendorId;
use crate::services::VendorService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Result, web};
use serde_json::json;

fn vendor_id_from_request(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<AuthVendorId>().map(|v| v.0.clone())
}

#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Vendor profile for the session"),
        (status = 401, description = "Unauthorized"),
    )
)]
pub async fn get_profile(
    vendor_service: web::Data<VendorService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let vendor_id = vendor_id_from_request(&req).unwrap_or_default();

    // The token verifier does not re-check directory membership, so a valid
    // token can still name a vendor that no longer exists; report null rather
    // than erroring.
    let vendor = vendor_service.get_by_id(&vendor_id).await;

    Ok(HttpResponse::Ok().json(json!({
        "ok": true,
        "vendor": vendor
    })))
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/user").route("/profile", web::get().to(get_profile)));
}

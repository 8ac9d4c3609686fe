use crate::models::*;
use crate::services::AuthService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/auth/send-otp",
    tag = "auth",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP challenge issued"),
        (status = 400, description = "Missing phone"),
    )
)]
pub async fn send_otp(
    auth_service: web::Data<AuthService>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse> {
    match auth_service.send_otp(&request.phone).await {
        Ok(echoed_code) => {
            let mut body = json!({
                "ok": true,
                "message": "OTP sent"
            });
            // Demo-only leak, config-gated; production delivers out-of-band.
            if let Some(code) = echoed_code {
                body["code"] = json!(code);
            }
            Ok(HttpResponse::Ok().json(body))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Session issued", body = AuthResponse),
        (status = 400, description = "Missing fields or invalid code"),
    )
)]
pub async fn verify_otp(
    auth_service: web::Data<AuthService>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse> {
    match auth_service.verify_otp(&request.phone, &request.code).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "ok": true,
            "token": response.token,
            "vendor": response.vendor
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/send-otp", web::post().to(send_otp))
            .route("/verify-otp", web::post().to(verify_otp)),
    );
}

use crate::middlewares::AuthVendorId;
use crate::models::*;
use crate::services::OrderService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Result, web};
use serde_json::json;

fn vendor_id_from_request(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<AuthVendorId>().map(|v| v.0.clone())
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    params(
        ("platform" = Option<String>, Query, description = "Exact platform match"),
        ("status" = Option<String>, Query, description = "Exact status match"),
        ("q" = Option<String>, Query, description = "Substring over order id or customer")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Orders for the authenticated vendor"),
        (status = 401, description = "Unauthorized"),
    )
)]
pub async fn list_orders(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse> {
    let vendor_id = vendor_id_from_request(&req).unwrap_or_default();

    let orders = order_service.query(&vendor_id, &query).await;

    Ok(HttpResponse::Ok().json(json!({
        "ok": true,
        "orders": orders
    })))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order stored", body = Order),
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let order = order_service.insert(request.into_inner()).await;

    Ok(HttpResponse::Ok().json(json!({
        "ok": true,
        "order": order
    })))
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(list_orders))
            .route("", web::post().to(create_order)),
    );
}

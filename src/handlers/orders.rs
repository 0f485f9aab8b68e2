use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{CartItemInput, OrderSummary, OrderView, ShippingInfo};
use crate::domain::user::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfoRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub name: String,
    pub image: Option<String>,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub shipping_info: ShippingInfoRequest,
    pub items: Vec<OrderItemRequest>,
}

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub id: Uuid,
    pub status: String,
    pub total_amount: String,
    pub created_at: String,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(o: OrderSummary) -> Self {
        Self {
            id: o.id,
            status: o.status,
            total_amount: o.total_amount.to_string(),
            created_at: o.created_at.to_rfc3339(),
            tracking_number: o.tracking_number,
            estimated_delivery: o.estimated_delivery,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEventResponse {
    pub status: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: Uuid,
    pub status: String,
    pub total_amount: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    pub created_at: String,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
    pub items: Vec<OrderItemResponse>,
    pub tracking: Vec<TrackingEventResponse>,
}

impl From<OrderView> for OrderDetailResponse {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            status: o.status,
            total_amount: o.total_amount.to_string(),
            shipping_address: o.shipping_address,
            shipping_city: o.shipping_city,
            shipping_state: o.shipping_state,
            shipping_zip: o.shipping_zip,
            created_at: o.created_at.to_rfc3339(),
            tracking_number: o.tracking_number,
            estimated_delivery: o.estimated_delivery,
            items: o
                .items
                .into_iter()
                .map(|i| OrderItemResponse {
                    product_id: i.product_id,
                    name: i.product_name,
                    image: i.product_image,
                    price: i.price.to_string(),
                    quantity: i.quantity,
                })
                .collect(),
            tracking: o
                .tracking
                .into_iter()
                .map(|t| TrackingEventResponse {
                    status: t.status,
                    description: t.description,
                    location: t.location,
                    created_at: t.created_at.to_rfc3339(),
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Places an order for the authenticated user: the order row, one snapshot
/// row per cart item and the initial tracking event are written in a single
/// database transaction.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Empty cart or malformed item data"),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let shipping = ShippingInfo {
        first_name: body.shipping_info.first_name,
        last_name: body.shipping_info.last_name,
        email: body.shipping_info.email,
        phone: body.shipping_info.phone,
        address: body.shipping_info.address,
        city: body.shipping_info.city,
        state: body.shipping_info.state,
        zip_code: body.shipping_info.zip_code,
        country: body.shipping_info.country,
    };
    let items = body
        .items
        .into_iter()
        .map(|item| {
            let price = BigDecimal::from_str(&item.price).map_err(|e| {
                AppError::Validation(format!("invalid price '{}': {}", item.price, e))
            })?;
            Ok(CartItemInput {
                product_id: item.product_id,
                name: item.name,
                image: item.image,
                price,
                quantity: item.quantity,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let state = state.into_inner();
    let placed = web::block(move || state.orders.place_order(&user, shipping, items))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(PlaceOrderResponse {
        order_id: placed.order_id,
        message: placed.message,
    }))
}

/// GET /api/orders
///
/// The caller's orders, newest first, without their items.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "The caller's orders", body = [OrderSummaryResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "orders"
)]
pub async fn my_orders(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let state = state.into_inner();
    let orders = web::block(move || state.orders.my_orders(&user))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let response: Vec<OrderSummaryResponse> =
        orders.into_iter().map(OrderSummaryResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/orders/{id}
///
/// One order with its item snapshots and tracking trail. Orders belonging
/// to other users read as 404.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "The order", body = OrderDetailResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown order"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let state = state.into_inner();

    let order = web::block(move || state.orders.get_order(&user, order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderDetailResponse::from(order)))
}

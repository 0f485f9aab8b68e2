use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub const STATUS_PLACED: &str = "PLACED";
pub const TRACKING_ORDER_PLACED: &str = "ORDER_PLACED";

/// One cart line as validated by the order workflow. Product data is a
/// client-declared snapshot; there is no live catalog to cross-check
/// against, and `product_id` is the external catalog id, not a key here.
#[derive(Debug, Clone)]
pub struct CartItemInput {
    pub product_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct ShippingInfo {
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

/// Everything the repository persists in one transaction: the order row,
/// one item row per cart line, and the initial tracking event.
#[derive(Debug, Clone)]
pub struct NewPlacedOrder {
    pub total_amount: BigDecimal,
    pub shipping: ShippingInfo,
    pub items: Vec<CartItemInput>,
}

#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub id: Uuid,
    pub product_id: i64,
    pub product_name: String,
    pub product_image: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct TrackingEventView {
    pub status: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An order without its items, for listings.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: Uuid,
    pub status: String,
    pub total_amount: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
}

/// A full order: the row, its item snapshots and its tracking trail.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub total_amount: BigDecimal,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    pub created_at: DateTime<Utc>,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
    pub items: Vec<OrderItemView>,
    pub tracking: Vec<TrackingEventView>,
}

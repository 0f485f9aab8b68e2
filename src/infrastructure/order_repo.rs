use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{
    NewPlacedOrder, OrderItemView, OrderSummary, OrderView, TrackingEventView, STATUS_PLACED,
    TRACKING_ORDER_PLACED,
};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, order_tracking, orders};

use super::models::{
    NewOrderItemRow, NewOrderRow, NewOrderTrackingRow, OrderItemRow, OrderRow, OrderTrackingRow,
};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_summary(row: OrderRow) -> OrderSummary {
    OrderSummary {
        id: row.id,
        status: row.status,
        total_amount: row.total_amount,
        created_at: row.created_at,
        tracking_number: row.tracking_number,
        estimated_delivery: row.estimated_delivery,
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create_placed(&self, user_id: Uuid, order: NewPlacedOrder) -> Result<Uuid, DomainError> {
        let NewPlacedOrder {
            total_amount,
            shipping,
            items,
        } = order;
        let mut conn = self.pool.get()?;

        // Order, item snapshots and the initial tracking event commit
        // together or not at all.
        conn.transaction::<_, DomainError, _>(|conn| {
            let order_id = Uuid::new_v4();
            diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: order_id,
                    user_id,
                    total_amount,
                    status: STATUS_PLACED.to_string(),
                    shipping_address: shipping.address,
                    shipping_city: shipping.city,
                    shipping_state: shipping.state,
                    shipping_zip: shipping.zip_code,
                })
                .execute(conn)?;

            let item_rows: Vec<NewOrderItemRow> = items
                .into_iter()
                .map(|item| NewOrderItemRow {
                    id: Uuid::new_v4(),
                    order_id,
                    product_id: item.product_id,
                    product_name: item.name,
                    product_image: item.image,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect();
            diesel::insert_into(order_items::table)
                .values(&item_rows)
                .execute(conn)?;

            diesel::insert_into(order_tracking::table)
                .values(&NewOrderTrackingRow {
                    id: Uuid::new_v4(),
                    order_id,
                    status: TRACKING_ORDER_PLACED.to_string(),
                    description: Some("Order has been placed successfully".to_string()),
                    location: None,
                })
                .execute(conn)?;

            Ok(order_id)
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::seq.asc())
            .select(OrderItemRow::as_select())
            .load(&mut conn)?;

        let tracking = order_tracking::table
            .filter(order_tracking::order_id.eq(order.id))
            .order(order_tracking::created_at.asc())
            .select(OrderTrackingRow::as_select())
            .load(&mut conn)?;

        Ok(Some(OrderView {
            id: order.id,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            shipping_city: order.shipping_city,
            shipping_state: order.shipping_state,
            shipping_zip: order.shipping_zip,
            created_at: order.created_at,
            tracking_number: order.tracking_number,
            estimated_delivery: order.estimated_delivery,
            items: items
                .into_iter()
                .map(|i| OrderItemView {
                    id: i.id,
                    product_id: i.product_id,
                    product_name: i.product_name,
                    product_image: i.product_image,
                    price: i.price,
                    quantity: i.quantity,
                })
                .collect(),
            tracking: tracking
                .into_iter()
                .map(|t| TrackingEventView {
                    status: t.status,
                    description: t.description,
                    location: t.location,
                    created_at: t.created_at,
                })
                .collect(),
        }))
    }

    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<OrderSummary>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = orders::table
            .filter(orders::user_id.eq(user_id))
            .order(orders::created_at.desc())
            .select(OrderRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(to_summary).collect())
    }
}

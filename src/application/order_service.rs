use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    CartItemInput, NewPlacedOrder, OrderSummary, OrderView, PlacedOrder, ShippingInfo,
};
use crate::domain::ports::OrderRepository;
use crate::domain::user::CurrentUser;

pub struct OrderService<R> {
    orders: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(orders: R) -> Self {
        Self { orders }
    }

    /// Validates the cart, computes the exact total and persists the order,
    /// its item snapshots and the initial tracking event in one unit.
    ///
    /// Item prices and names are the client's declaration, copied verbatim;
    /// there is no server-side re-pricing.
    pub fn place_order(
        &self,
        user: &CurrentUser,
        shipping: ShippingInfo,
        items: Vec<CartItemInput>,
    ) -> Result<PlacedOrder, DomainError> {
        if items.is_empty() {
            return Err(DomainError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        for item in &items {
            if item.quantity < 0 {
                return Err(DomainError::Validation(format!(
                    "negative quantity for product {}",
                    item.product_id
                )));
            }
            if item.price < BigDecimal::from(0) {
                return Err(DomainError::Validation(format!(
                    "negative price for product {}",
                    item.product_id
                )));
            }
        }

        let total_amount = order_total(&items);
        let order_id = self.orders.create_placed(
            user.id,
            NewPlacedOrder {
                total_amount,
                shipping,
                items,
            },
        )?;

        Ok(PlacedOrder {
            order_id,
            message: "Order placed successfully".to_string(),
        })
    }

    /// An order belonging to someone else reads the same as a missing one.
    pub fn get_order(&self, user: &CurrentUser, id: Uuid) -> Result<OrderView, DomainError> {
        let order = self
            .orders
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("Order"))?;
        if order.user_id != user.id {
            return Err(DomainError::NotFound("Order"));
        }
        Ok(order)
    }

    pub fn my_orders(&self, user: &CurrentUser) -> Result<Vec<OrderSummary>, DomainError> {
        self.orders.list_by_user(user.id)
    }
}

/// Σ price × quantity over the cart. `BigDecimal` keeps the sum exact and
/// independent of item order.
pub fn order_total(items: &[CartItemInput]) -> BigDecimal {
    items
        .iter()
        .map(|i| &i.price * BigDecimal::from(i.quantity))
        .sum()
}

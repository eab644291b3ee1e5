//! Orders

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    catalog::CatalogSnapshot,
    customers::CustomerId,
    ids::TypedId,
    payment::PaymentMethod,
    products::ProductId,
};

/// Order accepted by the backend
#[derive(Debug)]
pub struct SubmittedOrder;

/// Order Id
pub type OrderId = TypedId<SubmittedOrder>;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting fulfilment
    Pending,

    /// Paid and handed over
    Completed,

    /// Voided
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// A status string that is not pending, completed or cancelled.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status {0:?}")]
pub struct UnknownOrderStatus(pub String);

/// Price and quantity of one product, frozen when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product bought
    pub product_id: ProductId,

    /// Units bought
    pub quantity: u32,

    /// Unit price at the time of sale
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderItem {
    /// Price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order body built at the moment the payment form is submitted.
///
/// Everything is copied out of the cart and catalog, so later edits to
/// either cannot change what is sent or charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrder {
    /// Bound customer or the walk-in sentinel
    pub customer_id: CustomerId,

    /// Frozen line items
    pub items: Vec<OrderItem>,

    /// Sum of the line totals
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// How the sale was paid
    pub payment_method: PaymentMethod,

    /// Always [`OrderStatus::Completed`] for till sales
    pub status: OrderStatus,
}

impl PendingOrder {
    /// Copy the cart into a new order priced from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] when a line's product is missing from
    /// the catalog.
    pub fn snapshot(
        cart: &Cart,
        catalog: &CatalogSnapshot,
        customer_id: CustomerId,
        payment_method: PaymentMethod,
    ) -> Result<Self, CartError> {
        let items = cart
            .resolved(catalog)
            .map(|resolved| {
                resolved.map(|(line, product)| OrderItem {
                    product_id: line.product_id().clone(),
                    quantity: line.quantity(),
                    price: product.price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = items.iter().map(OrderItem::line_total).sum();

        Ok(Self {
            customer_id,
            items,
            total,
            payment_method,
            status: OrderStatus::Completed,
        })
    }
}

/// Loyalty points owed to a customer for a completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyAward {
    /// Customer credited
    pub customer_id: CustomerId,

    /// Points credited
    pub points: u64,
}

/// One point per whole currency unit spent.
pub fn loyalty_points_for(total: Decimal) -> u64 {
    total.floor().to_u64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            price: Decimal::new(cents, 2),
            category: String::new(),
            stock: 1,
            barcode: String::new(),
        }
    }

    #[test]
    fn snapshot_copies_prices_and_is_isolated_from_catalog_changes() -> TestResult {
        let catalog = CatalogSnapshot::new(vec![product("a", 1000), product("b", 500)], vec![]);
        let mut cart = Cart::new();

        cart.add_product(&catalog, &ProductId::new("a"))?;
        cart.add_product(&catalog, &ProductId::new("a"))?;
        cart.add_product(&catalog, &ProductId::new("b"))?;

        let order = PendingOrder::snapshot(
            &cart,
            &catalog,
            CustomerId::new("walk-in-customer"),
            PaymentMethod::Cash,
        )?;

        let repriced = CatalogSnapshot::new(vec![product("a", 5000), product("b", 100)], vec![]);

        assert_eq!(cart.total(&repriced)?, Decimal::new(10_100, 2));
        assert_eq!(order.total, Decimal::new(2500, 2));
        assert_eq!(order.items.first().map(|item| item.price), Some(Decimal::new(1000, 2)));
        assert_eq!(order.status, OrderStatus::Completed);

        Ok(())
    }

    #[test]
    fn serializes_as_create_order_body() -> TestResult {
        let order = PendingOrder {
            customer_id: CustomerId::new("c1"),
            items: vec![OrderItem {
                product_id: ProductId::new("a"),
                quantity: 2,
                price: Decimal::new(1000, 2),
            }],
            total: Decimal::new(2000, 2),
            payment_method: PaymentMethod::Card,
            status: OrderStatus::Completed,
        };

        let json = serde_json::to_value(&order)?;

        assert_eq!(
            json,
            serde_json::json!({
                "customerId": "c1",
                "items": [{ "productId": "a", "quantity": 2, "price": 10.0 }],
                "total": 20.0,
                "paymentMethod": "card",
                "status": "completed",
            })
        );

        Ok(())
    }

    #[test]
    fn loyalty_points_floor_the_total() {
        assert_eq!(loyalty_points_for(Decimal::new(2500, 2)), 25);
        assert_eq!(loyalty_points_for(Decimal::new(2599, 2)), 25);
        assert_eq!(loyalty_points_for(Decimal::new(99, 2)), 0);
    }
}

//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use till::{
    customers::CustomerId,
    orders::{OrderId, OrderItem, OrderStatus},
    payment::PaymentMethod,
};

/// Order as stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,

    pub status: OrderStatus,
    pub created_at: Timestamp,
}

impl Order {
    /// Units of `product` sold in this order.
    pub fn units_of(&self, product: &str) -> u64 {
        self.items
            .iter()
            .filter(|item| item.product_id.as_str() == product)
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}

/// Order Status Update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_backend_order() -> TestResult {
        let json = r#"{
            "id": "o-1",
            "customerId": "walk-in-customer",
            "items": [{"productId": "p-1", "quantity": 2, "price": 1.5}],
            "total": 3.0,
            "status": "completed",
            "createdAt": "2026-03-01T09:30:00Z"
        }"#;

        let order: Order = serde_json::from_str(json)?;

        assert_eq!(order.id.as_str(), "o-1");
        assert_eq!(order.total, Decimal::new(3, 0));
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.payment_method, None);
        assert_eq!(order.units_of("p-1"), 2);
        assert_eq!(order.units_of("p-2"), 0);

        Ok(())
    }

    #[test]
    fn status_update_body() -> TestResult {
        let body = serde_json::to_value(OrderStatusUpdate {
            status: OrderStatus::Cancelled,
        })?;

        assert_eq!(body, serde_json::json!({ "status": "cancelled" }));

        Ok(())
    }
}

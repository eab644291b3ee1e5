//! Customers

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Customer Id
pub type CustomerId = TypedId<Customer>;

/// Customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer id
    pub id: CustomerId,

    /// Display name, used for searching
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Orders placed so far
    #[serde(default)]
    pub total_orders: u32,

    /// Loyalty point balance
    #[serde(default)]
    pub loyalty_points: u64,
}

/// Customer fields sent when registering a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,
}

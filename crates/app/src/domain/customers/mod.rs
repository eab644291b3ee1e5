//! Customers

pub mod models;
pub mod service;

pub use models::*;
pub use service::*;
pub use till::customers::{Customer, CustomerId, NewCustomer};

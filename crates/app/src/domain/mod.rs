//! Till Domain Concerns

pub mod customers;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod reports;

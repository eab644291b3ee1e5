//! Till
//!
//! Point-of-sale core: a cached product catalog, the cart being rung up, the
//! customer bound to the sale and the checkout state machine that turns a cart
//! into exactly one order. Network access lives with the caller; this crate
//! only models state and its transitions.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod fixtures;
pub mod ids;
pub mod orders;
pub mod payment;
pub mod products;
pub mod receipt;
pub mod selection;
pub mod terminal;

pub mod prelude;

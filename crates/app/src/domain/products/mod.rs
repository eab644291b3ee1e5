//! Products

pub mod service;

pub use service::*;
pub use till::products::{NewProduct, Product, ProductId};

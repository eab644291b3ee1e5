//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{CatalogCache, CatalogSnapshot},
    checkout::{CheckoutError, CheckoutFlow, CheckoutState, Submission, SubmissionId},
    customers::{Customer, CustomerId, NewCustomer},
    orders::{
        LoyaltyAward, OrderId, OrderItem, OrderStatus, PendingOrder, loyalty_points_for,
    },
    payment::{PaymentError, PaymentForm, PaymentMethod},
    products::{NewProduct, Product, ProductId},
    receipt::{ReceiptError, write_cart, write_receipt},
    selection::{CustomerMatches, CustomerSelection, WALK_IN_CUSTOMER, filter_customers},
    terminal::{Settlement, Terminal, TerminalError},
};

//! Terminal
//!
//! Everything one till session owns: the catalog cache, the cart, the bound
//! customer and the checkout flow. Callers hold the terminal and drive it with
//! user input and network completions; the terminal itself never performs I/O.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    catalog::{CatalogCache, CatalogSnapshot},
    checkout::{CheckoutError, CheckoutFlow, CheckoutState, Submission, SubmissionId},
    customers::{Customer, CustomerId},
    orders::{LoyaltyAward, OrderId, PendingOrder, loyalty_points_for},
    payment::{PaymentError, PaymentForm},
    products::ProductId,
    selection::{CustomerMatches, CustomerSelection},
};

/// Errors surfaced to the cashier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerminalError {
    /// Cart edit rejected.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Payment form rejected.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Checkout transition rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The customer is not in the current catalog snapshot.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// The cart cannot change while the payment form is open or its order is
    /// being submitted.
    #[error("cart is locked while payment is in progress")]
    CartLocked,
}

/// Outcome of an order-creation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The order was created; cart and customer have been reset.
    Completed {
        /// Id assigned by the backend
        order_id: OrderId,

        /// What was charged
        submission: Submission,

        /// Points to credit, when a customer was bound
        loyalty: Option<LoyaltyAward>,
    },

    /// The order was rejected; cart and customer are untouched.
    Failed {
        /// Error shown to the cashier
        reason: String,
    },
}

/// Point-of-sale session state.
#[derive(Debug, Default)]
pub struct Terminal {
    catalog: CatalogCache,
    cart: Cart,
    selection: CustomerSelection,
    checkout: CheckoutFlow,
}

impl Terminal {
    /// Open a terminal with an empty cart over `snapshot`.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            catalog: CatalogCache::new(snapshot),
            ..Self::default()
        }
    }

    /// Catalog cache.
    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    /// Swap in a freshly fetched catalog.
    pub fn replace_catalog(&mut self, snapshot: CatalogSnapshot) {
        self.catalog.replace(snapshot);
    }

    /// Cart in progress.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Bound customer.
    pub fn selection(&self) -> &CustomerSelection {
        &self.selection
    }

    /// Bound customer's record, if it is in the catalog.
    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selection
            .customer_id()
            .and_then(|id| self.catalog.current().customer(id))
    }

    /// Checkout state.
    pub fn checkout(&self) -> &CheckoutState {
        self.checkout.state()
    }

    /// Cart total at current catalog prices.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if a line's product left the catalog.
    pub fn total(&self) -> Result<Decimal, CartError> {
        self.cart.total(self.catalog.current())
    }

    /// Add one unit of a product picked from the grid.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::CartLocked`] during payment or the cart error.
    pub fn add_product(&mut self, id: &ProductId) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        Ok(self.cart.add_product(self.catalog.current(), id)?)
    }

    /// Add one unit of a scanned product.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::CartLocked`] during payment or the cart error.
    pub fn scan(&mut self, barcode: &str) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        Ok(self.cart.add_by_barcode(self.catalog.current(), barcode)?)
    }

    /// Set a line's quantity; zero removes it.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::CartLocked`] during payment or the cart error.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        Ok(self.cart.set_quantity(id, quantity)?)
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::CartLocked`] during payment.
    pub fn remove_line(&mut self, id: &ProductId) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        self.cart.remove_line(id);

        Ok(())
    }

    /// Customers matching `search` in the cached list.
    pub fn customers_matching(&self, search: &str) -> CustomerMatches<'_> {
        self.catalog.current().customers_matching(search)
    }

    /// Bind the sale to a customer.
    ///
    /// # Errors
    ///
    /// - [`TerminalError::CartLocked`]: during payment.
    /// - [`TerminalError::CustomerNotFound`]: the id is not in the catalog.
    pub fn select_customer(&mut self, id: &CustomerId) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        if self.catalog.current().customer(id).is_none() {
            return Err(TerminalError::CustomerNotFound(id.clone()));
        }

        self.selection.select(id.clone());

        Ok(())
    }

    /// Return to a walk-in sale.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::CartLocked`] during payment.
    pub fn clear_customer(&mut self) -> Result<(), TerminalError> {
        self.ensure_unlocked()?;

        self.selection.clear();

        Ok(())
    }

    /// Open the payment modal.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] on an empty cart.
    pub fn open_payment(&mut self) -> Result<(), TerminalError> {
        Ok(self.checkout.open_payment(&self.cart)?)
    }

    /// Validate the payment form and freeze the order for submission.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadySubmitting`]: a submission is in flight; nothing is sent.
    /// - [`CheckoutError::EmptyCart`]: the cart was emptied after a failed
    ///   submission; state is unchanged.
    /// - [`TerminalError::Payment`]: the form is invalid; state is unchanged.
    /// - [`TerminalError::Cart`]: a line's product left the catalog.
    pub fn submit_payment(&mut self, form: PaymentForm) -> Result<Submission, TerminalError> {
        self.checkout.ensure_awaiting_payment()?;

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }

        form.validate(&self.selection)?;

        let order = PendingOrder::snapshot(
            &self.cart,
            self.catalog.current(),
            self.selection.customer_id_or_walk_in(),
            form.method,
        )?;

        Ok(self.checkout.submit(order, form.amount)?)
    }

    /// Apply the order-creation response for submission `id`.
    ///
    /// On success the loyalty award is computed, the catalog is marked stale,
    /// the cart and customer are cleared and the modal closes. On failure
    /// nothing but the checkout state changes.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleSubmission`] when the response belongs to
    /// a submission that is no longer in flight; it is discarded.
    pub fn settle(
        &mut self,
        id: SubmissionId,
        outcome: Result<OrderId, String>,
    ) -> Result<Settlement, TerminalError> {
        match outcome {
            Ok(order_id) => {
                let submission = self.checkout.complete(id, order_id.clone())?;

                let loyalty = self.selection.customer_id().map(|customer_id| LoyaltyAward {
                    customer_id: customer_id.clone(),
                    points: loyalty_points_for(submission.order.total),
                });

                self.catalog.invalidate();
                self.cart.clear();
                self.selection.clear();

                Ok(Settlement::Completed {
                    order_id,
                    submission,
                    loyalty,
                })
            }
            Err(reason) => {
                self.checkout.fail(id, reason.clone())?;

                Ok(Settlement::Failed { reason })
            }
        }
    }

    /// Go back to the payment form after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] unless failed.
    pub fn retry_payment(&mut self) -> Result<(), TerminalError> {
        Ok(self.checkout.retry()?)
    }

    /// Close the payment modal, keeping the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::SubmissionInFlight`] during submission.
    pub fn cancel_payment(&mut self) -> Result<(), TerminalError> {
        Ok(self.checkout.cancel()?)
    }

    /// Dismiss the completed-sale notice.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] unless completed.
    pub fn acknowledge(&mut self) -> Result<(), TerminalError> {
        Ok(self.checkout.acknowledge()?)
    }

    /// Give up on submission `id` without a response, as when the request
    /// was dropped. The checkout fails so the cashier can retry or cancel.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleSubmission`] when `id` is not in flight.
    pub fn abandon_submission(&mut self, id: SubmissionId) -> Result<(), TerminalError> {
        Ok(self.checkout.fail(id, "submission abandoned before a response")?)
    }

    /// Failed stays editable so the cart can be corrected before a retry.
    fn ensure_unlocked(&self) -> Result<(), TerminalError> {
        if matches!(
            self.checkout.state(),
            CheckoutState::AwaitingPayment | CheckoutState::Submitting(_)
        ) {
            return Err(TerminalError::CartLocked);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{payment::PaymentMethod, products::Product};

    use super::*;

    fn terminal() -> Terminal {
        let product = |id: &str, barcode: &str, cents: i64| Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            price: Decimal::new(cents, 2),
            category: String::new(),
            stock: 20,
            barcode: barcode.to_string(),
        };

        Terminal::new(CatalogSnapshot::new(
            vec![product("a", "111", 1000), product("b", "222", 500)],
            vec![Customer {
                id: CustomerId::new("c1"),
                name: "Ada".to_string(),
                email: String::new(),
                phone: String::new(),
                total_orders: 0,
                loyalty_points: 0,
            }],
        ))
    }

    fn cash(amount: i64) -> PaymentForm {
        PaymentForm::new(Decimal::new(amount, 0), PaymentMethod::Cash)
    }

    #[test]
    fn cart_is_locked_while_submitting() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.open_payment()?;
        terminal.submit_payment(cash(10))?;

        assert_eq!(terminal.scan("222"), Err(TerminalError::CartLocked));
        assert_eq!(
            terminal.set_quantity(&ProductId::new("a"), 5),
            Err(TerminalError::CartLocked)
        );
        assert_eq!(
            terminal.select_customer(&CustomerId::new("c1")),
            Err(TerminalError::CartLocked)
        );
        assert_eq!(terminal.cart().quantity_of(&ProductId::new("a")), 1);

        Ok(())
    }

    #[test]
    fn cart_is_locked_while_payment_form_is_open() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.open_payment()?;

        assert_eq!(
            terminal.remove_line(&ProductId::new("a")),
            Err(TerminalError::CartLocked)
        );
        assert_eq!(
            terminal.set_quantity(&ProductId::new("a"), 0),
            Err(TerminalError::CartLocked)
        );
        assert_eq!(terminal.clear_customer(), Err(TerminalError::CartLocked));
        assert_eq!(terminal.cart().quantity_of(&ProductId::new("a")), 1);

        let submission = terminal.submit_payment(cash(10))?;

        assert_eq!(submission.order.items.len(), 1);
        assert_eq!(submission.order.total, Decimal::TEN);

        Ok(())
    }

    #[test]
    fn cart_emptied_after_failure_cannot_be_resubmitted() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.open_payment()?;
        let submission = terminal.submit_payment(cash(10))?;
        terminal.settle(submission.id, Err("backend unavailable".to_string()))?;

        terminal.remove_line(&ProductId::new("a"))?;
        terminal.retry_payment()?;

        assert_eq!(
            terminal.submit_payment(cash(0)),
            Err(TerminalError::Checkout(CheckoutError::EmptyCart))
        );
        assert_eq!(terminal.checkout(), &CheckoutState::AwaitingPayment);

        Ok(())
    }

    #[test]
    fn abandoned_submission_unlocks_terminal() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.open_payment()?;
        let submission = terminal.submit_payment(cash(10))?;

        terminal.abandon_submission(submission.id)?;

        assert!(matches!(terminal.checkout(), CheckoutState::Failed { .. }));
        assert_eq!(
            terminal.settle(submission.id, Ok(OrderId::new("late"))),
            Err(TerminalError::Checkout(CheckoutError::StaleSubmission(submission.id)))
        );

        terminal.cancel_payment()?;
        terminal.scan("222")?;

        assert_eq!(terminal.cart().len(), 2);

        Ok(())
    }

    #[test]
    fn invalid_form_does_not_start_submission() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.open_payment()?;

        let result = terminal.submit_payment(PaymentForm::new(
            Decimal::TEN,
            PaymentMethod::LoyaltyPoints,
        ));

        assert_eq!(
            result,
            Err(TerminalError::Payment(PaymentError::LoyaltyPointsRequireCustomer))
        );
        assert_eq!(terminal.checkout(), &CheckoutState::AwaitingPayment);

        Ok(())
    }

    #[test]
    fn selecting_unknown_customer_fails() {
        let mut terminal = terminal();

        assert_eq!(
            terminal.select_customer(&CustomerId::new("nobody")),
            Err(TerminalError::CustomerNotFound(CustomerId::new("nobody")))
        );
        assert!(!terminal.selection().is_selected());
    }

    #[test]
    fn settle_success_resets_sale_and_marks_catalog_stale() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("111")?;
        terminal.select_customer(&CustomerId::new("c1"))?;
        terminal.open_payment()?;
        let submission = terminal.submit_payment(cash(10))?;

        let settlement = terminal.settle(submission.id, Ok(OrderId::new("o1")))?;

        assert!(matches!(
            settlement,
            Settlement::Completed { loyalty: Some(LoyaltyAward { points: 10, .. }), .. }
        ));
        assert!(terminal.cart().is_empty());
        assert!(!terminal.selection().is_selected());
        assert!(terminal.catalog().is_stale());

        Ok(())
    }

    #[test]
    fn walk_in_sale_earns_no_loyalty() -> TestResult {
        let mut terminal = terminal();

        terminal.scan("222")?;
        terminal.open_payment()?;
        let submission = terminal.submit_payment(cash(5))?;

        let settlement = terminal.settle(submission.id, Ok(OrderId::new("o1")))?;

        assert!(matches!(settlement, Settlement::Completed { loyalty: None, .. }));
        assert_eq!(submission.order.customer_id.as_str(), "walk-in-customer");

        Ok(())
    }
}

//! Terminal Session
//!
//! Drives a [`Terminal`] against the REST collaborators: loading the catalog,
//! sending the frozen order and crediting loyalty points once it is accepted.

use std::sync::Arc;

use thiserror::Error;
use till::{
    catalog::CatalogSnapshot,
    checkout::{Submission, SubmissionId},
    orders::{LoyaltyAward, OrderId},
    payment::PaymentForm,
    terminal::{Settlement, Terminal, TerminalError},
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    client::ApiError,
    context::AppContext,
    domain::{
        customers::{CustomersService, list_all_customers},
        orders::Order,
    },
};

/// Errors surfaced to the cashier.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The terminal refused the action; nothing was sent.
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    /// The catalog could not be loaded.
    #[error("failed to load catalog: {0}")]
    Catalog(#[source] ApiError),

    /// The backend rejected or never received the order. The cart is kept
    /// and the payment can be retried.
    #[error("order submission failed: {0}")]
    SubmissionFailed(#[source] ApiError),
}

/// A sale the backend accepted.
#[derive(Debug)]
pub struct CompletedSale {
    /// Order as stored by the backend
    pub order: Order,

    /// What was charged and tendered
    pub submission: Submission,

    /// Points being credited, when a customer was bound
    pub loyalty: Option<LoyaltyAward>,

    /// Background task crediting the points. It never fails; errors are
    /// logged.
    pub loyalty_task: Option<JoinHandle<()>>,
}

/// One cashier's session at the till.
#[derive(Debug)]
pub struct TerminalSession {
    context: AppContext,
    terminal: Terminal,
}

impl TerminalSession {
    /// Session with an empty catalog. Call [`Self::refresh_catalog`] before
    /// selling.
    #[must_use]
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            terminal: Terminal::default(),
        }
    }

    /// Create a session and load its catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if products or customers cannot be fetched.
    pub async fn connect(context: AppContext) -> Result<Self, SessionError> {
        let mut session = Self::new(context);

        session.refresh_catalog().await?;

        Ok(session)
    }

    /// Terminal state for display.
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Terminal for cart and customer edits.
    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    /// Fetch products and every customer page, then swap the snapshot in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] on any fetch failure; the previous
    /// snapshot stays in place.
    pub async fn refresh_catalog(&mut self) -> Result<(), SessionError> {
        let (products, customers) = tokio::try_join!(
            self.context.products.list_products(),
            list_all_customers(self.context.customers.as_ref()),
        )
        .map_err(SessionError::Catalog)?;

        info!(
            products = products.len(),
            customers = customers.len(),
            "catalog loaded"
        );

        self.terminal
            .replace_catalog(CatalogSnapshot::new(products, customers));

        Ok(())
    }

    /// Refresh the catalog if a completed sale marked it stale.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the refresh fails.
    pub async fn refresh_if_stale(&mut self) -> Result<(), SessionError> {
        if self.terminal.catalog().is_stale() {
            self.refresh_catalog().await?;
        }

        Ok(())
    }

    /// Submit the payment form and settle the sale with the backend's answer.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Terminal`]: the form or state was rejected before sending.
    /// - [`SessionError::SubmissionFailed`]: order creation failed; the
    ///   checkout is left in its failed state with the cart intact.
    ///
    /// Dropping the returned future before the backend answers fails the
    /// submission, leaving the cart intact for a retry.
    pub async fn submit_payment(
        &mut self,
        form: PaymentForm,
    ) -> Result<CompletedSale, SessionError> {
        let submission = self.terminal.submit_payment(form)?;

        debug!(
            submission = %submission.id,
            total = %submission.order.total,
            method = %submission.order.payment_method,
            "submitting order"
        );

        let in_flight = InFlight::new(&mut self.terminal, submission.id);

        let created = self
            .context
            .orders
            .create_order(submission.order.clone())
            .await;

        let order = match created {
            Ok(order) => order,
            Err(error) => {
                warn!(submission = %submission.id, %error, "order submission failed");

                in_flight.settle(Err(error.to_string()))?;

                return Err(SessionError::SubmissionFailed(error));
            }
        };

        match in_flight.settle(Ok(order.id.clone()))? {
            Settlement::Completed {
                order_id,
                submission,
                loyalty,
            } => {
                info!(order = %order_id, total = %submission.order.total, "sale completed");

                let loyalty_task = loyalty
                    .clone()
                    .map(|award| spawn_loyalty_award(Arc::clone(&self.context.customers), award));

                Ok(CompletedSale {
                    order,
                    submission,
                    loyalty,
                    loyalty_task,
                })
            }
            Settlement::Failed { reason } => Err(SessionError::SubmissionFailed(
                ApiError::UnexpectedResponse(reason),
            )),
        }
    }

    /// Return to the payment form after a failed submission.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Terminal`] unless the last submission failed.
    pub fn retry_payment(&mut self) -> Result<(), SessionError> {
        Ok(self.terminal.retry_payment()?)
    }

    /// Dismiss a completed sale and reload the catalog it invalidated.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Terminal`]: no sale has completed.
    /// - [`SessionError::Catalog`]: the reload failed; the sale itself stands.
    pub async fn acknowledge(&mut self) -> Result<(), SessionError> {
        self.terminal.acknowledge()?;

        self.refresh_if_stale().await
    }
}

/// Submission awaiting its response. Dropped unsettled, it fails the
/// submission so the terminal does not stay locked.
struct InFlight<'a> {
    terminal: &'a mut Terminal,
    id: SubmissionId,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(terminal: &'a mut Terminal, id: SubmissionId) -> Self {
        Self {
            terminal,
            id,
            settled: false,
        }
    }

    fn settle(mut self, outcome: Result<OrderId, String>) -> Result<Settlement, TerminalError> {
        self.settled = true;

        self.terminal.settle(self.id, outcome)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!(submission = %self.id, "order submission dropped before a response");

        if let Err(error) = self.terminal.abandon_submission(self.id) {
            debug!(submission = %self.id, %error, "submission already settled");
        }
    }
}

fn spawn_loyalty_award(
    customers: Arc<dyn CustomersService>,
    award: LoyaltyAward,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let customer = award.customer_id.clone();
        let points = award.points;

        match customers.award_loyalty_points(award).await {
            Ok(()) => info!(%customer, points, "loyalty points awarded"),
            Err(error) => warn!(%customer, points, %error, "failed to award loyalty points"),
        }
    })
}

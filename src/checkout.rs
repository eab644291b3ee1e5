//! Checkout Flow
//!
//! One authoritative state value for the payment modal. The cart-empty
//! guard, the in-flight lock and the modal visibility all derive from it.
//!
//! ```text
//! Idle ──open_payment──▶ AwaitingPayment ──submit──▶ Submitting ──complete──▶ Completed
//!  ▲                        │    ▲                       │                        │
//!  └────────cancel──────────┘    └──retry── Failed ◀─fail┘                        │
//!  ▲                                          │                                   │
//!  └──────────────cancel──────────────────────┘◀───────────acknowledge────────────┘
//! ```

use std::{fmt, mem};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::Cart,
    orders::{OrderId, PendingOrder},
};

/// Errors raised by invalid checkout transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Payment cannot start on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A payment is already being submitted.
    #[error("a payment is already being submitted")]
    AlreadySubmitting,

    /// The modal cannot close while a submission is in flight.
    #[error("a submission is in flight")]
    SubmissionInFlight,

    /// A response arrived for a submission that is no longer current.
    #[error("submission {0} is no longer current")]
    StaleSubmission(SubmissionId),

    /// The action is not valid in the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        /// Current state name
        state: &'static str,

        /// Attempted action
        action: &'static str,
    },
}

/// Identifies one payment submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Order on its way to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Submission id, checked when the response arrives
    pub id: SubmissionId,

    /// Frozen order body
    pub order: PendingOrder,

    /// Amount tendered on the payment form
    pub tendered: Decimal,
}

impl Submission {
    /// Change owed to the customer, if they tendered more than the total.
    pub fn change_due(&self) -> Option<Decimal> {
        (self.tendered > self.order.total).then(|| self.tendered - self.order.total)
    }
}

/// Checkout state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// No payment in progress
    #[default]
    Idle,

    /// Payment modal open
    AwaitingPayment,

    /// Order creation in flight
    Submitting(Submission),

    /// Order accepted; waiting for the cashier to acknowledge
    Completed {
        /// Id assigned by the backend
        order_id: OrderId,

        /// What was submitted
        submission: Submission,
    },

    /// Order creation failed; modal still open
    Failed {
        /// Submission that failed
        submission: SubmissionId,

        /// Error shown to the cashier
        reason: String,
    },
}

impl CheckoutState {
    /// Short state name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingPayment => "awaiting payment",
            Self::Submitting(_) => "submitting",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Payment state machine for a single terminal.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
    next_id: u64,
}

impl CheckoutFlow {
    /// Start idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether the payment modal is showing.
    pub fn is_payment_open(&self) -> bool {
        matches!(
            self.state,
            CheckoutState::AwaitingPayment | CheckoutState::Submitting(_) | CheckoutState::Failed { .. }
        )
    }

    /// Whether an order creation request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, CheckoutState::Submitting(_))
    }

    /// Open the payment modal.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::InvalidTransition`]: not idle.
    pub fn open_payment(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if !matches!(self.state, CheckoutState::Idle) {
            return Err(self.invalid("open payment"));
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = CheckoutState::AwaitingPayment;

        Ok(())
    }

    /// Hand over the frozen order for submission.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadySubmitting`]: a submission is in flight.
    /// - [`CheckoutError::InvalidTransition`]: the modal is not awaiting payment.
    pub fn submit(
        &mut self,
        order: PendingOrder,
        tendered: Decimal,
    ) -> Result<Submission, CheckoutError> {
        self.ensure_awaiting_payment()?;

        self.next_id += 1;

        let submission = Submission {
            id: SubmissionId(self.next_id),
            order,
            tendered,
        };

        self.state = CheckoutState::Submitting(submission.clone());

        Ok(submission)
    }

    /// Check that a payment form may be submitted now.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub fn ensure_awaiting_payment(&self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::AwaitingPayment => Ok(()),
            CheckoutState::Submitting(_) => Err(CheckoutError::AlreadySubmitting),
            _ => Err(self.invalid("submit payment")),
        }
    }

    /// Record that the backend accepted submission `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleSubmission`] when `id` is not the
    /// submission in flight; the state is left untouched.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        order_id: OrderId,
    ) -> Result<Submission, CheckoutError> {
        let submission = self.take_submission(id)?;

        self.state = CheckoutState::Completed {
            order_id,
            submission: submission.clone(),
        };

        Ok(submission)
    }

    /// Record that submission `id` failed.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleSubmission`] when `id` is not the
    /// submission in flight.
    pub fn fail(&mut self, id: SubmissionId, reason: impl Into<String>) -> Result<(), CheckoutError> {
        self.take_submission(id)?;

        self.state = CheckoutState::Failed {
            submission: id,
            reason: reason.into(),
        };

        Ok(())
    }

    /// Return to the payment form after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] unless failed.
    pub fn retry(&mut self) -> Result<(), CheckoutError> {
        if !matches!(self.state, CheckoutState::Failed { .. }) {
            return Err(self.invalid("retry"));
        }

        self.state = CheckoutState::AwaitingPayment;

        Ok(())
    }

    /// Close the payment modal without paying.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::SubmissionInFlight`]: an order is being created.
    /// - [`CheckoutError::InvalidTransition`]: the sale already completed.
    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::Idle | CheckoutState::AwaitingPayment | CheckoutState::Failed { .. } => {
                self.state = CheckoutState::Idle;

                Ok(())
            }
            CheckoutState::Submitting(_) => Err(CheckoutError::SubmissionInFlight),
            CheckoutState::Completed { .. } => Err(self.invalid("cancel")),
        }
    }

    /// Dismiss a completed sale.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] unless completed.
    pub fn acknowledge(&mut self) -> Result<(), CheckoutError> {
        if !matches!(self.state, CheckoutState::Completed { .. }) {
            return Err(self.invalid("acknowledge"));
        }

        self.state = CheckoutState::Idle;

        Ok(())
    }

    fn take_submission(&mut self, id: SubmissionId) -> Result<Submission, CheckoutError> {
        match mem::take(&mut self.state) {
            CheckoutState::Submitting(submission) if submission.id == id => Ok(submission),
            other => {
                self.state = other;

                Err(CheckoutError::StaleSubmission(id))
            }
        }
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        CheckoutError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

//! Payment

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::CustomerSelection;

/// Errors raised when validating the payment form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The tendered amount is below zero.
    #[error("amount must be positive")]
    NegativeAmount,

    /// The tendered amount is not a number.
    #[error("malformed amount {0:?}")]
    MalformedAmount(String),

    /// The payment method is not one of cash, card or loyalty points.
    #[error("unknown payment method {0:?}")]
    UnknownMethod(String),

    /// Loyalty points were chosen for a walk-in sale.
    #[error("loyalty points require a selected customer")]
    LoyaltyPointsRequireCustomer,
}

/// Way a sale is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash
    Cash,

    /// Card
    Card,

    /// Customer's loyalty balance
    LoyaltyPoints,
}

impl PaymentMethod {
    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::LoyaltyPoints => "loyalty_points",
        }
    }

    /// Methods on offer for the given selection.
    ///
    /// Loyalty points are only offered when a customer is bound.
    pub fn available(selection: &CustomerSelection) -> &'static [PaymentMethod] {
        if selection.is_selected() {
            &[Self::Cash, Self::Card, Self::LoyaltyPoints]
        } else {
            &[Self::Cash, Self::Card]
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "loyalty_points" => Ok(Self::LoyaltyPoints),
            other => Err(PaymentError::UnknownMethod(other.to_string())),
        }
    }
}

/// Payment form as entered at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentForm {
    /// Amount tendered
    pub amount: Decimal,

    /// Chosen method
    pub method: PaymentMethod,
}

impl PaymentForm {
    /// Create a form from already-typed values.
    pub fn new(amount: Decimal, method: PaymentMethod) -> Self {
        Self { amount, method }
    }

    /// Parse raw form input.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::MalformedAmount`]: `amount` is not a decimal number.
    /// - [`PaymentError::UnknownMethod`]: `method` is not a known method.
    pub fn parse(amount: &str, method: &str) -> Result<Self, PaymentError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_err| PaymentError::MalformedAmount(amount.to_string()))?;

        Ok(Self::new(amount, method.parse()?))
    }

    /// Check the form against the current customer selection.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::NegativeAmount`]: the amount is below zero.
    /// - [`PaymentError::LoyaltyPointsRequireCustomer`]: loyalty points on a walk-in sale.
    pub fn validate(&self, selection: &CustomerSelection) -> Result<(), PaymentError> {
        if self.amount < Decimal::ZERO {
            return Err(PaymentError::NegativeAmount);
        }

        if self.method == PaymentMethod::LoyaltyPoints && !selection.is_selected() {
            return Err(PaymentError::LoyaltyPointsRequireCustomer);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::customers::CustomerId;

    use super::*;

    #[test]
    fn parse_reads_amount_and_method() -> TestResult {
        let form = PaymentForm::parse(" 25.00 ", "card")?;

        assert_eq!(form.amount, Decimal::new(2500, 2));
        assert_eq!(form.method, PaymentMethod::Card);

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            PaymentForm::parse("ten", "cash"),
            Err(PaymentError::MalformedAmount("ten".to_string()))
        );
        assert_eq!(
            PaymentForm::parse("10", "cheque"),
            Err(PaymentError::UnknownMethod("cheque".to_string()))
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let form = PaymentForm::new(Decimal::new(-1, 0), PaymentMethod::Cash);

        assert_eq!(
            form.validate(&CustomerSelection::Unselected),
            Err(PaymentError::NegativeAmount)
        );
    }

    #[test]
    fn zero_amount_is_accepted() {
        let form = PaymentForm::new(Decimal::ZERO, PaymentMethod::Cash);

        assert_eq!(form.validate(&CustomerSelection::Unselected), Ok(()));
    }

    #[test]
    fn loyalty_points_need_a_customer() {
        let form = PaymentForm::new(Decimal::TEN, PaymentMethod::LoyaltyPoints);

        assert_eq!(
            form.validate(&CustomerSelection::Unselected),
            Err(PaymentError::LoyaltyPointsRequireCustomer)
        );
        assert_eq!(
            form.validate(&CustomerSelection::Selected(CustomerId::new("c1"))),
            Ok(())
        );
    }

    #[test]
    fn loyalty_points_only_offered_with_customer() {
        assert!(!PaymentMethod::available(&CustomerSelection::Unselected)
            .contains(&PaymentMethod::LoyaltyPoints));
        assert!(
            PaymentMethod::available(&CustomerSelection::Selected(CustomerId::new("c1")))
                .contains(&PaymentMethod::LoyaltyPoints)
        );
    }

    #[test]
    fn method_serializes_snake_case() -> TestResult {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::LoyaltyPoints)?,
            "\"loyalty_points\""
        );

        Ok(())
    }
}

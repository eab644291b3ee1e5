//! Customer Models

use serde::Deserialize;
use thiserror::Error;
use till::customers::{Customer, NewCustomer};

/// Shortest accepted customer name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Fewest digits accepted in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// One page of the customer listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    pub total_pages: u32,
}

/// The listing endpoint answers either with a paged envelope or, on older
/// backends, with a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CustomersResponse {
    Page {
        customers: Vec<Customer>,

        #[serde(rename = "totalPages", default)]
        total_pages: u32,
    },
    List(Vec<Customer>),
}

impl From<CustomersResponse> for CustomerPage {
    fn from(response: CustomersResponse) -> Self {
        match response {
            CustomersResponse::Page {
                customers,
                total_pages,
            } => Self {
                customers,
                total_pages: total_pages.max(1),
            },
            CustomersResponse::List(customers) => Self {
                customers,
                total_pages: 1,
            },
        }
    }
}

/// Reasons a customer registration is refused before it is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerValidationError {
    #[error("name must be at least {MIN_NAME_LENGTH} characters")]
    NameTooShort,

    #[error("invalid email address {0:?}")]
    InvalidEmail(String),

    #[error("phone number must have at least {MIN_PHONE_DIGITS} digits")]
    PhoneTooShort,
}

/// Check a registration form.
///
/// # Errors
///
/// Returns the first rule the form breaks.
pub fn validate_new_customer(customer: &NewCustomer) -> Result<(), CustomerValidationError> {
    if customer.name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(CustomerValidationError::NameTooShort);
    }

    let valid_email = customer
        .email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });

    if !valid_email || customer.email.contains(char::is_whitespace) {
        return Err(CustomerValidationError::InvalidEmail(customer.email.clone()));
    }

    if customer.phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return Err(CustomerValidationError::PhoneTooShort);
    }

    Ok(())
}

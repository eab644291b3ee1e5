//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use till::{customers::Customer, orders::LoyaltyAward};

use crate::{
    client::{ApiClient, ApiError},
    domain::customers::{CustomerPage, CustomersResponse, NewCustomer},
};

const CUSTOMERS_PATH: &str = "/api/customers";

#[derive(Debug, Clone)]
pub struct HttpCustomersService {
    client: ApiClient,
}

impl HttpCustomersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomersService for HttpCustomersService {
    async fn list_customers(&self, page: u32, search: String) -> Result<CustomerPage, ApiError> {
        let response: CustomersResponse = self
            .client
            .get(
                CUSTOMERS_PATH,
                &[("page", page.to_string()), ("search", search)],
            )
            .await?;

        Ok(response.into())
    }

    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, ApiError> {
        self.client
            .send(Method::POST, CUSTOMERS_PATH, &customer)
            .await
    }

    async fn award_loyalty_points(&self, award: LoyaltyAward) -> Result<(), ApiError> {
        let path = format!("{CUSTOMERS_PATH}/{}/loyalty-points", award.customer_id);

        self.client.post_discarding(&path, &award).await
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves one page of customers, filtered by `search`. Pages start at 1.
    async fn list_customers(&self, page: u32, search: String) -> Result<CustomerPage, ApiError>;

    /// Registers a new customer.
    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, ApiError>;

    /// Credits loyalty points to a customer.
    async fn award_loyalty_points(&self, award: LoyaltyAward) -> Result<(), ApiError>;
}

/// Walk every page of the unfiltered customer listing.
///
/// # Errors
///
/// Returns the first page error.
pub async fn list_all_customers(
    customers: &dyn CustomersService,
) -> Result<Vec<Customer>, ApiError> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let CustomerPage {
            customers: batch,
            total_pages,
        } = customers.list_customers(page, String::new()).await?;

        all.extend(batch);

        if page >= total_pages {
            return Ok(all);
        }

        page += 1;
    }
}

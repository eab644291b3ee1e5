//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    client::{ApiClient, ApiError},
    domain::reports::{ProductSales, SalesPoint},
};

#[derive(Debug, Clone)]
pub struct HttpReportsService {
    client: ApiClient,
}

impl HttpReportsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReportsService for HttpReportsService {
    async fn sales(&self, days: u32) -> Result<Vec<SalesPoint>, ApiError> {
        self.client
            .get("/api/reports/sales", &[("days", days.to_string())])
            .await
    }

    async fn top_products(&self, days: u32) -> Result<Vec<ProductSales>, ApiError> {
        self.client
            .get("/api/reports/top-products", &[("days", days.to_string())])
            .await
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Daily revenue over the last `days` days.
    async fn sales(&self, days: u32) -> Result<Vec<SalesPoint>, ApiError>;

    /// Best sellers by units over the last `days` days.
    async fn top_products(&self, days: u32) -> Result<Vec<ProductSales>, ApiError>;
}

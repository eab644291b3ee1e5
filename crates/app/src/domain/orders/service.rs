//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use till::orders::{OrderId, OrderStatus, PendingOrder};

use crate::{
    client::{ApiClient, ApiError},
    domain::orders::{Order, OrderStatusUpdate},
};

const ORDERS_PATH: &str = "/api/orders";

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get(ORDERS_PATH, &[]).await
    }

    async fn create_order(&self, order: PendingOrder) -> Result<Order, ApiError> {
        self.client.send(Method::POST, ORDERS_PATH, &order).await
    }

    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.client
            .send(
                Method::PATCH,
                &format!("{ORDERS_PATH}/{order}"),
                &OrderStatusUpdate { status },
            )
            .await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves every order.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Places an order; the backend assigns its id and timestamp.
    async fn create_order(&self, order: PendingOrder) -> Result<Order, ApiError>;

    /// Moves an order to a new status.
    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;
}

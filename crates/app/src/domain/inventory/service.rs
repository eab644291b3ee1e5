//! Inventory service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    client::{ApiClient, ApiError},
    domain::inventory::{InventoryItem, InventoryPage, NewInventoryItem},
};

const INVENTORY_PATH: &str = "/api/inventory";

#[derive(Debug, Clone)]
pub struct HttpInventoryService {
    client: ApiClient,
}

impl HttpInventoryService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryService for HttpInventoryService {
    async fn list_inventory(&self, page: u32, search: String) -> Result<InventoryPage, ApiError> {
        self.client
            .get(
                INVENTORY_PATH,
                &[("page", page.to_string()), ("search", search)],
            )
            .await
    }

    async fn create_inventory_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItem, ApiError> {
        self.client.send(Method::POST, INVENTORY_PATH, &item).await
    }

    async fn update_inventory_item(&self, item: InventoryItem) -> Result<InventoryItem, ApiError> {
        let path = format!("{INVENTORY_PATH}/{}", item.id);

        self.client.send(Method::PUT, &path, &item).await
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Retrieves one page of stock records, filtered by `search`.
    async fn list_inventory(&self, page: u32, search: String) -> Result<InventoryPage, ApiError>;

    /// Adds a stock record.
    async fn create_inventory_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItem, ApiError>;

    /// Replaces a stock record.
    async fn update_inventory_item(&self, item: InventoryItem) -> Result<InventoryItem, ApiError>;
}

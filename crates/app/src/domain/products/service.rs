//! Products service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    client::{ApiClient, ApiError},
    domain::products::{NewProduct, Product, ProductId},
};

const PRODUCTS_PATH: &str = "/api/products";

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: ApiClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get(PRODUCTS_PATH, &[]).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        self.client
            .send(Method::POST, PRODUCTS_PATH, &product)
            .await
    }

    async fn update_product(&self, product: Product) -> Result<Product, ApiError> {
        let path = format!("{PRODUCTS_PATH}/{}", product.id);

        self.client.send(Method::PUT, &path, &product).await
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{PRODUCTS_PATH}/{product}"))
            .await
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the whole catalog.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Creates a new product; the backend assigns its id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError>;

    /// Replaces a product's details.
    async fn update_product(&self, product: Product) -> Result<Product, ApiError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ApiError>;
}

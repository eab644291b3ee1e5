//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    client::{ApiClient, ApiError},
    config::ApiConfig,
    domain::{
        customers::{CustomersService, HttpCustomersService},
        inventory::{HttpInventoryService, InventoryService},
        orders::{HttpOrdersService, OrdersService},
        products::{HttpProductsService, ProductsService},
        reports::{HttpReportsService, ReportsService},
    },
};

/// Errors raised while wiring up the application.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be built.
    #[error("failed to build http client")]
    Client(#[source] ApiError),
}

/// REST collaborators shared by the CLI commands and the terminal session.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub orders: Arc<dyn OrdersService>,
    pub inventory: Arc<dyn InventoryService>,
    pub reports: Arc<dyn ReportsService>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context talking to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let client = ApiClient::new(config.client_config()).map_err(AppInitError::Client)?;

        Ok(Self {
            products: Arc::new(HttpProductsService::new(client.clone())),
            customers: Arc::new(HttpCustomersService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client.clone())),
            inventory: Arc::new(HttpInventoryService::new(client.clone())),
            reports: Arc::new(HttpReportsService::new(client)),
        })
    }
}

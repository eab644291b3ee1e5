//! Till configuration

mod api;
mod observability;
mod terminal;

pub use api::ApiConfig;
pub use observability::{LogFormat, LoggingConfig};
pub use terminal::{DisplayCurrency, TerminalConfig};

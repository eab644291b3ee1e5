//! Till application layer: the REST collaborators, the async session that
//! drives a terminal against them, dashboard figures, configuration and
//! logging.

pub mod client;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod domain;
pub mod observability;
pub mod session;

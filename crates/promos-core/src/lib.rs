//! Domain model for the promotional-product catalog.
//!
//! Everything here is pure: products are built by `promos-sheets`, and this
//! crate only validates, aggregates, and looks them up.

pub mod app_config;
pub mod config;
pub mod products;
pub mod report;
pub mod stats;
pub mod validation;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{find_by_id, ListingMeta, Product};
pub use report::{validation_report, ProductDetail, ValidationItem};
pub use stats::{summarize, ProductStats};
pub use validation::{validate, Validation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Shared configuration and domain types for the listify workspace.

pub mod app_config;
pub mod attributes;
pub mod config;

pub use app_config::{AppConfig, Environment, SearchCredentials};
pub use attributes::ProductAttributes;
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::numbers_api::NumbersApiClient;
pub use config::ServerConfig;
pub use core::service::{ClassifierService, FALLBACK_FACT};
pub use utils::error::{ClassifierError, Result};

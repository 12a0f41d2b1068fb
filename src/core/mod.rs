pub mod classifier;
pub mod service;

pub use crate::domain::model::{ClassificationResult, Number, Property};
pub use crate::domain::ports::{ConfigProvider, FactProvider};
pub use crate::utils::error::Result;

use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of trivia text about a number.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fetch_fact(&self, number: i64) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn fact_api_url(&self) -> &str;
    fn fact_timeout(&self) -> Duration;
}

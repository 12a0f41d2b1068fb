use crate::core::{ConfigProvider, FactProvider};
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the numbersapi.com math facts endpoint.
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    base_url: String,
    client: Client,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.fact_api_url(), config.fact_timeout())
    }

    fn fact_url(&self, number: i64) -> String {
        format!("{}/{}/math?json", self.base_url, number)
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn fetch_fact(&self, number: i64) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fact from: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: Value = response.json().await?;

        match body.get("text") {
            Some(Value::String(text)) => Ok(text.clone()),
            Some(Value::Null) | None => Err(ClassifierError::FactUnavailable {
                number,
                reason: "response has no 'text' field".to_string(),
            }),
            Some(other) => Ok(other.to_string()),
        }
    }
}

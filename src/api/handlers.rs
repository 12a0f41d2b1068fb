use crate::api::error::ApiError;
use crate::core::service::ClassifierService;
use crate::core::{ClassificationResult, FactProvider, Number};
use axum::extract::{RawQuery, State};
use axum::response::Json;
use std::sync::Arc;

const NUMBER_PARAM: &str = "number";

/// GET /api/classify-number?number=<int|float>
pub async fn classify_number<F: FactProvider + 'static>(
    State(service): State<Arc<ClassifierService<F>>>,
    RawQuery(query): RawQuery,
) -> Result<Json<ClassificationResult>, ApiError> {
    let raw = first_param(query.as_deref(), NUMBER_PARAM).ok_or(ApiError::MissingParameter)?;
    let number: Number = raw.parse()?;

    let result = service.classify(number).await.map_err(|e| {
        tracing::error!("Classification of {} failed: {}", number, e);
        ApiError::Internal
    })?;
    tracing::debug!(
        "Classified {}: prime={}, perfect={}, properties={:?}",
        result.number,
        result.is_prime,
        result.is_perfect,
        result.properties
    );

    Ok(Json(result))
}

// Repeated keys resolve to the first occurrence.
fn first_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

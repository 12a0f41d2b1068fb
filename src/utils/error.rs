use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Classification task failed: {0}")]
    ComputationFailed(#[from] tokio::task::JoinError),

    #[error("No fact available for {number}: {reason}")]
    FactUnavailable { number: i64, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClassifierError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClassifierError::ApiError(_) => "Could not reach the number facts service".to_string(),
            ClassifierError::ComputationFailed(_) => "The number could not be classified".to_string(),
            ClassifierError::FactUnavailable { number, .. } => {
                format!("The number facts service has nothing for {}", number)
            }
            ClassifierError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Generation cancelled")]
    Cancelled,

    #[error("The AI provider rejected the prompt: {0}")]
    PromptRejected(String),

    #[error("AI quota or rate limit reached, wait a minute and try again: {0}")]
    RateLimited(String),

    #[error("The AI service is temporarily unavailable, try again later: {0}")]
    ServerUnavailable(String),

    #[error("Could not reach the AI service, check your connection: {0}")]
    Connectivity(String),

    #[error("No syllabus topics matched: {0}")]
    TopicResolution(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Cancelled => "CANCELLED",
            AppError::PromptRejected(_) => "PROMPT_REJECTED",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::ServerUnavailable(_) => "SERVER_UNAVAILABLE",
            AppError::Connectivity(_) => "CONNECTIVITY",
            AppError::TopicResolution(_) => "TOPIC_RESOLUTION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Cancelled.error_code(), "CANCELLED");
        assert_eq!(
            AppError::RateLimited("429".into()).error_code(),
            "RATE_LIMITED"
        );
        assert_eq!(
            AppError::TopicResolution("syllogism".into()).error_code(),
            "TOPIC_RESOLUTION"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ValidationError("question_count".into());
        assert_eq!(err.to_string(), "Validation error: question_count");
    }

    #[test]
    fn test_only_cancelled_is_cancellation() {
        assert!(AppError::Cancelled.is_cancellation());
        assert!(!AppError::Connectivity("timeout".into()).is_cancellation());
    }
}

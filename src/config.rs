use std::{env, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` switches the engine to the offline mock provider.
    pub api_key: Option<SecretString>,
    pub api_base_url: String,
    pub model_name: String,
    pub max_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub chunk_size: u32,
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("AI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            api_base_url: env::var("AI_API_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            model_name: env::var("AI_MODEL_NAME")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            max_attempts: env::var("AI_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_base_delay_ms: env::var("AI_RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            chunk_size: env::var("GENERATION_CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            temperature: env::var("AI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.9),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    /// Rejects settings the generation pipeline cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::ConfigError(
                "AI_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(AppError::ConfigError(
                "GENERATION_CHUNK_SIZE must be at least 1".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ConfigError(format!(
                "AI_TEMPERATURE must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.model_name.trim().is_empty() {
            return Err(AppError::ConfigError(
                "AI_MODEL_NAME must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            api_key: None,
            api_base_url: "http://localhost:8089/v1".to_string(),
            model_name: "test-model".to_string(),
            max_attempts: 3,
            retry_base_delay_ms: 1000,
            chunk_size: 5,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.api_base_url.is_empty());
        assert!(!config.model_name.is_empty());
        assert!(config.max_attempts >= 1);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(!config.has_credentials());
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.chunk_size, 5);
        assert_eq!(config.retry_base_delay(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut config = Config::test_config();
        config.chunk_size = 0;

        let err = config.validate().expect_err("zero chunk size should be rejected");
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::test_config();
        config.temperature = 3.5;

        assert!(config.validate().is_err());
    }
}

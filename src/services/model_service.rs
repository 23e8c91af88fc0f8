//! Schema-constrained model invocation with retry, JSON repair and error classification.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        cancellation::{checkpoint, CancelToken},
        json_repair::parse_model_json,
    },
};

// A status only counts next to "status", "HTTP" or a `code` key, never as a bare number.
static STATUS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:\bstatus(?:\s+code)?|\bhttp(?:/[\d.]+)?|"?\bcode"?)\s*[:=]?\s*"?([45]\d{2})\b"#)
        .expect("status pattern is valid")
});

static SAFETY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bsafety\b|\bcontent[_ ]?(?:filter|policy)|\bprompt[_ ]blocked\b|\bblocked\s+(?:by|due to)\s+(?:the\s+)?(?:safety|content|policy)\b",
    )
    .expect("safety pattern is valid")
});

static RATE_LIMIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rate[_ ]limit|quota|resource[_ ]exhausted|\btoo many requests\b")
        .expect("rate limit pattern is valid")
});

static SERVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\boverloaded\b|\bunavailable\b|\bserver[_ ]error\b|\bbad gateway\b|\bgateway time-?out\b|\binternal error\b",
    )
    .expect("server pattern is valid")
});

/// One structured-output call as seen by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub schema_name: String,
    pub schema: Value,
    pub extended_reasoning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider call was cancelled")]
    Cancelled,

    #[error("{message}")]
    Failed { status: Option<u16>, message: String },
}

impl ProviderError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Cancelled => None,
            ProviderError::Failed { status, .. } => *status,
        }
    }

    pub fn failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ProviderError::Failed {
            status,
            message: message.into(),
        }
    }

    /// Builds a failure from free-form error text, picking up an embedded HTTP status if any.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let status = STATUS_RE
            .captures(&message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok());
        ProviderError::Failed { status, message }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Returns the raw text of the model's answer.
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String, ProviderError>;
}

/// JSON schema handed to the provider together with its name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
}

impl ResponseSchema {
    pub fn of<T: JsonSchema>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            schema: schema_for!(T).to_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_attempts, config.retry_base_delay())
    }

    /// Delay after the given failed attempt (1-based): `base * 2^(attempt - 1)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1000))
    }
}

/// Everything one wrapper call needs besides the cancellation token.
#[derive(Debug, Clone, Copy)]
pub struct ModelCall<'a> {
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub schema: &'a ResponseSchema,
    pub extended_reasoning: bool,
}

#[derive(Debug)]
enum AttemptError {
    Fatal(AppError),
    Retriable { status: Option<u16>, message: String },
}

fn is_non_retriable(status: Option<u16>, message: &str) -> bool {
    let client_error = matches!(status, Some(code) if (400..500).contains(&code) && code != 408 && code != 429);
    client_error || SAFETY_RE.is_match(message)
}

fn exhausted_error(status: Option<u16>, message: String) -> AppError {
    if status == Some(429) || RATE_LIMIT_RE.is_match(&message) {
        return AppError::RateLimited(message);
    }

    if matches!(status, Some(code) if code >= 500) || SERVER_RE.is_match(&message) {
        return AppError::ServerUnavailable(message);
    }

    AppError::Connectivity(message)
}

fn uniqueness_clause() -> String {
    format!(
        "\n\n[Request {} at {} ms UTC. Produce fresh content that does not repeat earlier requests.]",
        Uuid::new_v4(),
        Utc::now().timestamp_millis()
    )
}

/// Wraps a [`ModelProvider`] with the retry and parsing contract every generator relies on.
#[derive(Clone)]
pub struct ModelService {
    provider: Arc<dyn ModelProvider>,
    retry: RetryPolicy,
}

impl ModelService {
    pub fn new(provider: Arc<dyn ModelProvider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub async fn invoke(&self, call: ModelCall<'_>, cancel: Option<&CancelToken>) -> AppResult<Value> {
        self.invoke_as::<Value>(call, cancel).await
    }

    /// Calls the provider until the answer decodes into `T` or the attempts run out.
    pub async fn invoke_as<T: DeserializeOwned>(
        &self,
        call: ModelCall<'_>,
        cancel: Option<&CancelToken>,
    ) -> AppResult<T> {
        let mut last_failure = (None, String::from("no attempt was made"));

        for attempt in 1..=self.retry.max_attempts {
            checkpoint(cancel)?;

            let request = StructuredRequest {
                system_instruction: call.system_instruction.to_string(),
                prompt: format!("{}{}", call.prompt, uniqueness_clause()),
                schema_name: call.schema.name.clone(),
                schema: call.schema.schema.clone(),
                extended_reasoning: call.extended_reasoning,
            };

            match self.attempt::<T>(request).await {
                Ok(value) => {
                    if attempt > 1 {
                        log::info!("Model call '{}' succeeded on attempt {}", call.schema.name, attempt);
                    }
                    return Ok(value);
                }
                Err(AttemptError::Fatal(err)) => return Err(err),
                Err(AttemptError::Retriable { status, message }) => {
                    log::warn!(
                        "Model call '{}' attempt {}/{} failed: {}",
                        call.schema.name,
                        attempt,
                        self.retry.max_attempts,
                        message
                    );
                    last_failure = (status, message);
                }
            }

            if attempt < self.retry.max_attempts {
                tokio::time::sleep(self.retry.delay_for(attempt)).await;
            }
        }

        let (status, message) = last_failure;
        Err(exhausted_error(status, message))
    }

    async fn attempt<T: DeserializeOwned>(&self, request: StructuredRequest) -> Result<T, AttemptError> {
        let raw = match self.provider.generate_structured(request).await {
            Ok(raw) => raw,
            Err(ProviderError::Cancelled) => return Err(AttemptError::Fatal(AppError::Cancelled)),
            Err(ProviderError::Failed { status, message }) => {
                if is_non_retriable(status, &message) {
                    log::warn!("Model provider rejected the prompt: {}", message);
                    return Err(AttemptError::Fatal(AppError::PromptRejected(message)));
                }
                return Err(AttemptError::Retriable { status, message });
            }
        };

        let value = parse_model_json(&raw).map_err(|err| AttemptError::Retriable {
            status: None,
            message: err.to_string(),
        })?;

        serde_json::from_value(value).map_err(|err| AttemptError::Retriable {
            status: None,
            message: format!("model response has an unexpected shape: {}", err),
        })
    }
}

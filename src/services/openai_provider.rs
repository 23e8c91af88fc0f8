use async_openai::{
    config::OpenAIConfig,
    error::{ApiError, OpenAIError},
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    services::model_service::{ModelProvider, ProviderError, StructuredRequest},
};

/// Chat-completions provider for any OpenAI-compatible endpoint (Gemini, OpenAI, local gateways).
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(config: &Config, api_key: &SecretString) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&config.api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
        }
    }

    fn request_body(&self, request: &StructuredRequest) -> Value {
        let mut body = json!({
            "model": self.model_name,
            "temperature": self.temperature,
            "messages": [
                { "role": "system", "content": request.system_instruction },
                { "role": "user", "content": request.prompt },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema_name,
                    "schema": request.schema,
                    "strict": false,
                },
            },
        });

        if request.extended_reasoning {
            body["reasoning_effort"] = json!("high");
        }

        body
    }
}

fn extract_content(response: &Value) -> Result<String, ProviderError> {
    let choice = &response["choices"][0];

    if choice["finish_reason"].as_str() == Some("content_filter") {
        return Err(ProviderError::failed(
            None,
            "Response blocked by the provider's safety filter",
        ));
    }

    choice["message"]["content"]
        .as_str()
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ProviderError::failed(None, "Model returned no content"))
}

/// Status implied by an API error's `type`/`code` tags. The client only surfaces the
/// error body, so the tags stand in for the HTTP status.
fn api_error_status(error: &ApiError) -> Option<u16> {
    let tags: Vec<String> = [&error.r#type, &error.code]
        .into_iter()
        .flatten()
        .map(|tag| tag.to_ascii_lowercase())
        .collect();
    let tagged = |names: &[&str]| tags.iter().any(|tag| names.contains(&tag.as_str()));

    if tags.is_empty() {
        // 5xx bodies are passed through untyped
        return ProviderError::from_message(error.message.as_str())
            .status()
            .or(Some(503));
    }
    if tagged(&["rate_limit_exceeded", "rate_limit_error", "insufficient_quota", "requests", "tokens", "resource_exhausted"]) {
        return Some(429);
    }
    if tagged(&["server_error", "service_unavailable", "overloaded_error", "internal_error", "unavailable"]) {
        return Some(503);
    }
    if tagged(&["invalid_api_key", "authentication_error", "unauthenticated"]) {
        return Some(401);
    }
    if tagged(&["permission_error", "permission_denied"]) {
        return Some(403);
    }
    if tagged(&["model_not_found", "not_found_error", "not_found"]) {
        return Some(404);
    }
    if tagged(&["invalid_request_error", "content_policy_violation", "content_filter", "invalid_argument"]) {
        return Some(400);
    }
    ProviderError::from_message(error.message.as_str()).status()
}

/// Maps a client error onto the retry classification `ModelService` works with.
pub fn classify_error(error: &OpenAIError) -> ProviderError {
    match error {
        OpenAIError::ApiError(api_error) => {
            ProviderError::failed(api_error_status(api_error), api_error.to_string())
        }
        OpenAIError::Reqwest(err) => {
            ProviderError::failed(err.status().map(|status| status.as_u16()), error.to_string())
        }
        OpenAIError::JSONDeserialize(_, content) => {
            let status = ProviderError::from_message(content.as_str()).status();
            ProviderError::failed(status, error.to_string())
        }
        OpenAIError::InvalidArgument(_) => ProviderError::failed(Some(400), error.to_string()),
        _ => ProviderError::from_message(error.to_string()),
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String, ProviderError> {
        log::debug!(
            "Calling model {} for '{}' (extended reasoning: {})",
            self.model_name,
            request.schema_name,
            request.extended_reasoning
        );

        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(&request))
            .await
            .map_err(|err: OpenAIError| classify_error(&err))?;

        extract_content(&response)
    }
}

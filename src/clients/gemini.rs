use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Url};

use crate::clients::models::common::Content;
use crate::clients::models::requests::{GenerateContentRequest, GenerationConfig};
use crate::clients::models::responses::GenerateContentResponse;
use crate::config::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-attempt text generation against the Gemini `generateContent` endpoint.
///
/// There are no retries: every call is metered, and callers already have a
/// local fallback for any failure.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, api_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/models/{}:generateContent",
            api_url.trim_end_matches('/'),
            model
        ))?;

        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            endpoint,
            api_key: api_key.to_string(),
        })
    }

    /// `None` when no API key is configured, which switches the AI path off.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        config
            .gemini_api_key
            .as_deref()
            .map(|key| {
                Self::new(
                    key,
                    &config.gemini_model,
                    &config.gemini_api_url,
                    config.gemini_timeout,
                )
            })
            .transpose()
    }

    pub async fn generate_text(&self, prompt: &str, config: GenerationConfig) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: config,
        };
        let json_body = serde_json::to_string(&request)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            max_output_tokens = config.max_output_tokens,
            "gemini.request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(anyhow::anyhow!(
                "Gemini request failed with status {}: {}",
                status,
                body
            ));
        }

        let body = response.text().await?;
        let api_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {}", e))?;

        let finish_reason = api_response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .unwrap_or("none");

        tracing::debug!(finish_reason, "gemini.response");

        api_response.first_text().ok_or_else(|| {
            anyhow::anyhow!("Gemini returned no text (finish reason: {})", finish_reason)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> GeminiClient {
        GeminiClient::new("test-key", "test-model", &server.uri(), timeout).unwrap()
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        }))
    }

    #[tokio::test]
    async fn test_generate_text_sends_prompt_and_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "hello coach"}]}],
                "generationConfig": {"maxOutputTokens": 200, "topK": 1}
            })))
            .respond_with(text_response("hi"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let text = client
            .generate_text("hello coach", GenerationConfig::PROGRESSION)
            .await
            .unwrap();

        assert_eq!(text, "hi");
    }

    #[tokio::test]
    async fn test_generate_text_joins_parts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "first "}, {"text": "second"}]}}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let text = client
            .generate_text("prompt", GenerationConfig::ROUTINE_ANALYSIS)
            .await
            .unwrap();

        assert_eq!(text, "first second");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let err = client
            .generate_text("prompt", GenerationConfig::PROGRESSION)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let result = client
            .generate_text("prompt", GenerationConfig::EXERCISE_INFO)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(text_response("too late").set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(200));
        let result = client
            .generate_text("prompt", GenerationConfig::PROGRESSION)
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_from_config_without_key_is_none() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(GeminiClient::from_config(&config).unwrap().is_none());

        let config = Config::from_lookup(|key| {
            (key == "GEMINI_API_KEY").then(|| "secret".to_string())
        })
        .unwrap();
        assert!(GeminiClient::from_config(&config).unwrap().is_some());
    }
}

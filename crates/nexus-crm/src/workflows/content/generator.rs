use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ContentConfig;

/// Text generation backend used by the content service.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, GeneratorError>;
}

/// `generateContent` client for the Gemini REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(config.endpoint.clone(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, GeneratorError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, "requesting generated content");
        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let payload: GenerateResponse = response.json().await?;
        payload.text().ok_or(GeneratorError::EmptyResponse)
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, joined in order.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("content endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content endpoint returned {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("content endpoint returned no text")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new("https://example.test/v1beta/", "gemini-2.5-flash");
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn response_text_concatenates_first_candidate_parts() {
        let payload: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Subject: Hi\n" }, { "text": "Body" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .expect("payload parses");
        assert_eq!(payload.text().as_deref(), Some("Subject: Hi\nBody"));
    }

    #[test]
    fn blank_or_missing_candidates_yield_nothing() {
        let empty: GenerateResponse = serde_json::from_value(json!({})).expect("parses");
        assert_eq!(empty.text(), None);

        let blank: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
        }))
        .expect("parses");
        assert_eq!(blank.text(), None);
    }
}

//! Gemini-backed analysis client with a structured-output response schema.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::warn;

use crate::{AnalysisResult, FoodAnalysis, GEMINI_API_KEY_ENV};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable overriding the model name
pub const GEMINI_MODEL_ENV: &str = "PETLOG_GEMINI_MODEL";

pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Construct from the environment; `None` when the credential is absent.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())?;
        Some(Self::new(api_key, std::env::var(GEMINI_MODEL_ENV).ok()))
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn run_analysis(&self, name: &str, brand: &str, notes: &str) -> Result<AnalysisResult> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_payload(name, brand, notes))
            .send()
            .await
            .context("analysis request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read analysis response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(anyhow!("analysis request failed: status {status}: {message}"));
        }

        parse_analysis(&body)
    }
}

#[async_trait]
impl FoodAnalysis for GeminiClient {
    async fn analyze(&self, name: &str, brand: &str, notes: &str) -> AnalysisResult {
        match self.run_analysis(name, brand, notes).await {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    error = %format!("{error:#}"),
                    "food analysis failed, returning safe default"
                );
                AnalysisResult::safe_default()
            }
        }
    }
}

/// Build the `generateContent` payload. The response schema pins the output
/// to the `AnalysisResult` wire shape.
fn request_payload(name: &str, brand: &str, notes: &str) -> Value {
    let prompt = format!(
        "Analyze this pet food item for a household cat-food log.\n\
         Name: {name}\nBrand: {brand}\nNotes: {notes}\n\
         Return short descriptive tags, a one-line summary, and whether the \
         item is generally considered safe for cats."
    );

    json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": prompt}]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "tags": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "summary": {"type": "STRING"},
                    "isGenerallySafe": {"type": "BOOLEAN"}
                },
                "required": ["tags", "summary", "isGenerallySafe"]
            }
        }
    })
}

/// Extract the structured payload from a `generateContent` response body.
fn parse_analysis(body: &str) -> Result<AnalysisResult> {
    let v: Value =
        serde_json::from_str(body).context("failed to parse analysis response JSON")?;

    let text = v["candidates"][0]["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
        .ok_or_else(|| anyhow!("analysis response contained no text part"))?;

    serde_json::from_str(text).context("failed to parse structured analysis payload")
}

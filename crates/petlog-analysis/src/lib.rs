//! Optional food-analysis capability.
//!
//! A dormant collaborator: nothing in the save flow calls it. Two
//! interchangeable implementations — [`StubClient`] returning fixed safe
//! defaults and the Gemini-backed [`GeminiClient`] — are selected at startup
//! from the environment. Implementations never let an error escape; any
//! failure degrades to [`AnalysisResult::safe_default`].

mod gemini;
mod stub;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use gemini::{GEMINI_MODEL_ENV, GeminiClient};
pub use stub::StubClient;

/// Environment variable holding the Gemini credential
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Structured result of analyzing one food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short descriptive tags
    pub tags: Vec<String>,
    /// One-line summary
    pub summary: String,
    /// Safety flag; `true` in every fallback path
    #[serde(rename = "isGenerallySafe")]
    pub is_generally_safe: bool,
}

impl AnalysisResult {
    /// The fixed fallback payload: no tags, empty summary, assumed safe.
    pub fn safe_default() -> Self {
        Self {
            tags: Vec::new(),
            summary: String::new(),
            is_generally_safe: true,
        }
    }
}

/// Capability interface for food analysis
#[async_trait]
pub trait FoodAnalysis: Send + Sync {
    /// Analyze a food item from its free-text fields. Infallible by
    /// contract: failures return [`AnalysisResult::safe_default`].
    async fn analyze(&self, name: &str, brand: &str, notes: &str) -> AnalysisResult;
}

/// Pick the analysis client at startup: Gemini when a credential is
/// configured, the stub otherwise.
pub fn client_from_env() -> Box<dyn FoodAnalysis> {
    match GeminiClient::from_env() {
        Some(client) => Box::new(client),
        None => {
            debug!("{GEMINI_API_KEY_ENV} not set, using stub analysis client");
            Box::new(StubClient)
        }
    }
}

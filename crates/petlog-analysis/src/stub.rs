use async_trait::async_trait;

use crate::{AnalysisResult, FoodAnalysis};

/// Stub analysis: returns the fixed safe default immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubClient;

#[async_trait]
impl FoodAnalysis for StubClient {
    async fn analyze(&self, _name: &str, _brand: &str, _notes: &str) -> AnalysisResult {
        AnalysisResult::safe_default()
    }
}

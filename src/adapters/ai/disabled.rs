//! Generator stand-in for deployments without an API key.

use async_trait::async_trait;

use crate::domain::goal::{Complexity, MilestonePlan};
use crate::ports::{GenerationError, JourneyGenerator};

/// Journey generator that always reports itself unavailable.
///
/// Wired in when no OpenAI key is configured, so goal creation takes
/// the placeholder-journey path instead of failing.
#[derive(Debug, Clone, Default)]
pub struct DisabledJourneyGenerator;

impl DisabledJourneyGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JourneyGenerator for DisabledJourneyGenerator {
    async fn generate(
        &self,
        _title: &str,
        _complexity: Complexity,
        _duration_weeks: u32,
    ) -> Result<Vec<MilestonePlan>, GenerationError> {
        Err(GenerationError::Unavailable(
            "Journey generation is not configured".to_string(),
        ))
    }
}

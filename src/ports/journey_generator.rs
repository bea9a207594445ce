//! Journey generation contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::goal::{Complexity, MilestonePlan};

/// Failure of a journey generation attempt.
///
/// Callers recover from every variant by falling back to the placeholder
/// journey; these errors never reach clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The generator could not be reached or did not answer in time.
    #[error("journey generator unavailable: {0}")]
    Unavailable(String),

    /// The generator answered with something that is not a journey plan.
    #[error("journey generator returned malformed output: {0}")]
    Malformed(String),
}

/// Produces a weekly milestone plan for a new goal.
#[async_trait]
pub trait JourneyGenerator: Send + Sync {
    /// Generates one milestone plan entry per week of the journey.
    ///
    /// Implementations return the plan as given by the backing model;
    /// the caller decides whether it is usable.
    async fn generate(
        &self,
        title: &str,
        complexity: Complexity,
        duration_weeks: u32,
    ) -> Result<Vec<MilestonePlan>, GenerationError>;
}

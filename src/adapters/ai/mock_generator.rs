//! Mock journey generator for testing.
//!
//! Returns queued outcomes without calling a real model, and records
//! every request for verification.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::goal::{Complexity, MilestonePlan};
use crate::ports::{GenerationError, JourneyGenerator};

/// A recorded generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub title: String,
    pub complexity: Complexity,
    pub duration_weeks: u32,
}

/// Mock journey generator with queued outcomes.
///
/// Outcomes are consumed in order; once the queue is empty the
/// generator reports itself unavailable.
#[derive(Debug, Clone, Default)]
pub struct MockJourneyGenerator {
    outcomes: Arc<Mutex<VecDeque<Result<Vec<MilestonePlan>, GenerationError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockJourneyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful plan.
    pub fn with_plan(self, plan: Vec<MilestonePlan>) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(plan));
        self
    }

    /// Queues a generation failure.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a well-formed plan of `duration_weeks` sequential entries.
    pub fn with_weekly_plan(self, duration_weeks: u32) -> Self {
        let plan = (1..=duration_weeks)
            .map(|week| MilestonePlan {
                week,
                objective: format!("Objective for week {}", week),
                dependencies: Vec::new(),
                resources: Vec::new(),
            })
            .collect();
        self.with_plan(plan)
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JourneyGenerator for MockJourneyGenerator {
    async fn generate(
        &self,
        title: &str,
        complexity: Complexity,
        duration_weeks: u32,
    ) -> Result<Vec<MilestonePlan>, GenerationError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            title: title.to_string(),
            complexity,
            duration_weeks,
        });

        self.outcomes.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(GenerationError::Unavailable(
                "No queued outcomes left".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_outcomes_in_order() {
        let generator = MockJourneyGenerator::new()
            .with_weekly_plan(2)
            .with_error(GenerationError::Malformed("bad".to_string()));

        let first = generator
            .generate("Learn Rust", Complexity::Beginner, 2)
            .await
            .unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].week, 1);

        let second = generator.generate("Learn Go", Complexity::Beginner, 2).await;
        assert!(matches!(second, Err(GenerationError::Malformed(_))));
    }

    #[tokio::test]
    async fn records_every_request() {
        let generator = MockJourneyGenerator::new().with_weekly_plan(3);

        generator
            .generate("Learn SQL", Complexity::Intermediate, 3)
            .await
            .unwrap();

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title, "Learn SQL");
        assert_eq!(requests[0].duration_weeks, 3);
    }

    #[tokio::test]
    async fn empty_queue_reports_unavailable() {
        let generator = MockJourneyGenerator::new();

        let result = generator.generate("Anything", Complexity::Beginner, 1).await;
        assert!(matches!(result, Err(GenerationError::Unavailable(_))));
    }
}

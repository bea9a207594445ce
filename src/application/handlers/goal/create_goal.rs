//! CreateGoalHandler - Command handler for creating goals with a journey.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::{Complexity, Goal, GoalError, Milestone, NewGoal};
use crate::ports::{GoalRepository, JourneyGenerator};

/// Command to create a new goal.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub complexity: Complexity,
    pub duration_weeks: u32,
}

/// Handler for creating goals.
///
/// Journey generation is best-effort: any generator failure or unusable
/// plan falls back to the placeholder journey, logged at warn level and
/// never surfaced to the caller.
pub struct CreateGoalHandler {
    goals: Arc<dyn GoalRepository>,
    generator: Arc<dyn JourneyGenerator>,
}

impl CreateGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>, generator: Arc<dyn JourneyGenerator>) -> Self {
        Self { goals, generator }
    }

    pub async fn handle(&self, cmd: CreateGoalCommand) -> Result<Goal, GoalError> {
        // 1. Validate the requested fields before spending a generator call
        let new = NewGoal::new(
            cmd.title,
            cmd.description,
            cmd.category,
            cmd.complexity,
            cmd.duration_weeks,
        )?;

        // 2. Ask the generator for a plan, falling back when it fails or
        //    does not cover each week exactly once
        let duration_weeks = new.duration_weeks();
        let journey = match self
            .generator
            .generate(new.title(), new.complexity(), duration_weeks)
            .await
        {
            Ok(plan) => match Milestone::journey_from_plan(plan, duration_weeks) {
                Some(journey) => journey,
                None => {
                    tracing::warn!(
                        title = %new.title(),
                        duration_weeks,
                        "generated plan does not cover the journey, using placeholder"
                    );
                    Milestone::placeholder_journey(duration_weeks)
                }
            },
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    title = %new.title(),
                    "journey generation failed, using placeholder"
                );
                Milestone::placeholder_journey(duration_weeks)
            }
        };

        // 3. Persist the goal with its journey
        let goal = Goal::create(GoalId::generate(), cmd.user_id, new, journey);
        self.goals.insert(&goal).await?;

        Ok(goal)
    }
}

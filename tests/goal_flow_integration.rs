//! Integration tests for the goal lifecycle.
//!
//! These tests drive the application handlers end-to-end with in-memory
//! adapters: goal creation with and without a working journey generator,
//! milestone updates rolling up into progress and status, and the
//! placeholder journey across the whole duration range.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;

use goallab::adapters::ai::MockJourneyGenerator;
use goallab::application::handlers::goal::{
    CreateGoalCommand, CreateGoalHandler, GetGoalProgressHandler, GetGoalProgressQuery,
    UpdateMilestoneCommand, UpdateMilestoneHandler,
};
use goallab::domain::foundation::{GoalId, StoreError, UserId};
use goallab::domain::goal::{Complexity, Goal, GoalStatus, Milestone, MilestoneStatus, NewGoal};
use goallab::ports::{GenerationError, GoalRepository, JourneyGenerator};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory goal store.
struct InMemoryGoalStore {
    goals: Mutex<Vec<Goal>>,
}

impl InMemoryGoalStore {
    fn new() -> Self {
        Self {
            goals: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalStore {
    async fn insert(&self, goal: &Goal) -> Result<(), StoreError> {
        self.goals.lock().unwrap().push(goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GoalId, owner: UserId) -> Result<Option<Goal>, StoreError> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id() == id && g.user_id() == owner)
            .cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Goal>, StoreError> {
        let mut goals: Vec<Goal> = self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id() == owner)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at().as_datetime().cmp(a.created_at().as_datetime()));
        Ok(goals)
    }

    async fn update(&self, goal: &Goal) -> Result<bool, StoreError> {
        let mut goals = self.goals.lock().unwrap();
        match goals
            .iter()
            .position(|g| g.id() == goal.id() && g.user_id() == goal.user_id())
        {
            Some(pos) => {
                goals[pos] = goal.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: GoalId, owner: UserId) -> Result<bool, StoreError> {
        let mut goals = self.goals.lock().unwrap();
        match goals
            .iter()
            .position(|g| g.id() == id && g.user_id() == owner)
        {
            Some(pos) => {
                goals.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Generator that is permanently down.
struct UnreachableGenerator;

#[async_trait]
impl JourneyGenerator for UnreachableGenerator {
    async fn generate(
        &self,
        _title: &str,
        _complexity: Complexity,
        _duration_weeks: u32,
    ) -> Result<Vec<goallab::domain::goal::MilestonePlan>, GenerationError> {
        Err(GenerationError::Unavailable("connect timeout".to_string()))
    }
}

fn create_command(user_id: UserId, duration_weeks: u32) -> CreateGoalCommand {
    CreateGoalCommand {
        user_id,
        title: "Learn Go".to_string(),
        description: "Become productive in Go within a month".to_string(),
        category: "programming".to_string(),
        complexity: Complexity::Intermediate,
        duration_weeks,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn generator_outage_falls_back_to_the_placeholder_journey() {
    let store = Arc::new(InMemoryGoalStore::new());
    let handler = CreateGoalHandler::new(store.clone(), Arc::new(UnreachableGenerator));
    let user_id = UserId::generate();

    let goal = handler.handle(create_command(user_id, 4)).await.unwrap();

    assert_eq!(goal.milestones().len(), 4);
    for (index, milestone) in goal.milestones().iter().enumerate() {
        let week = index as u32 + 1;
        assert_eq!(milestone.week(), week);
        assert_eq!(milestone.objective(), format!("Week {} learning", week));
        assert_eq!(milestone.status(), MilestoneStatus::NotStarted);
    }
    assert_eq!(goal.progress().value(), 0);
    assert_eq!(goal.status(), GoalStatus::NotStarted);
    assert_eq!(goal.current_week(), 1);

    // The goal was persisted, not just returned.
    let stored = store.find_by_id(goal.id(), user_id).await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn milestone_updates_roll_up_into_progress_status_and_current_week() {
    let store = Arc::new(InMemoryGoalStore::new());
    let create = CreateGoalHandler::new(store.clone(), Arc::new(UnreachableGenerator));
    let update = UpdateMilestoneHandler::new(store.clone());
    let progress = GetGoalProgressHandler::new(store.clone());
    let user_id = UserId::generate();

    let goal = create.handle(create_command(user_id, 4)).await.unwrap();
    let goal_id = goal.id();

    // Completing week 2 moves progress to 25% and the pointer to week 2.
    let goal = update
        .handle(UpdateMilestoneCommand {
            user_id,
            goal_id,
            week: 2,
            status: MilestoneStatus::Completed,
        })
        .await
        .unwrap();
    assert_eq!(goal.progress().value(), 25);
    assert_eq!(goal.status(), GoalStatus::InProgress);
    assert_eq!(goal.current_week(), 2);

    // Completing the remaining weeks finishes the goal.
    for week in [1, 3, 4] {
        update
            .handle(UpdateMilestoneCommand {
                user_id,
                goal_id,
                week,
                status: MilestoneStatus::Completed,
            })
            .await
            .unwrap();
    }

    let summary = progress
        .handle(GetGoalProgressQuery { user_id, goal_id })
        .await
        .unwrap();
    assert_eq!(summary.progress.value(), 100);
    assert_eq!(summary.status, GoalStatus::Completed);
    assert_eq!(summary.milestones.total, 4);
    assert_eq!(summary.milestones.completed, 4);
    assert_eq!(summary.milestones.not_started, 0);
}

#[tokio::test]
async fn a_usable_generated_plan_becomes_the_journey() {
    let store = Arc::new(InMemoryGoalStore::new());
    let generator = Arc::new(MockJourneyGenerator::new().with_weekly_plan(3));
    let handler = CreateGoalHandler::new(store, generator.clone());
    let user_id = UserId::generate();

    let goal = handler.handle(create_command(user_id, 3)).await.unwrap();

    assert_eq!(goal.milestones().len(), 3);
    assert_eq!(goal.milestones()[0].objective(), "Objective for week 1");
    assert_eq!(goal.milestones()[2].objective(), "Objective for week 3");

    // The generator saw the request as the caller phrased it.
    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, "Learn Go");
    assert_eq!(requests[0].duration_weeks, 3);
}

#[tokio::test]
async fn a_plan_with_the_wrong_week_count_falls_back_to_the_placeholder() {
    let store = Arc::new(InMemoryGoalStore::new());
    // Two entries for a four week goal.
    let generator = Arc::new(MockJourneyGenerator::new().with_weekly_plan(2));
    let handler = CreateGoalHandler::new(store, generator);
    let user_id = UserId::generate();

    let goal = handler.handle(create_command(user_id, 4)).await.unwrap();

    assert_eq!(goal.milestones().len(), 4);
    assert_eq!(goal.milestones()[0].objective(), "Week 1 learning");
    assert_eq!(goal.milestones()[3].objective(), "Week 4 learning");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(52))]

    /// Every duration in the accepted range yields one placeholder
    /// milestone per week, all not started, with zero progress.
    #[test]
    fn prop_placeholder_journey_covers_every_accepted_duration(duration in 1u32..=52) {
        let new = NewGoal::new(
            "Learn Go",
            "Become productive in Go within a month",
            "programming",
            Complexity::Intermediate,
            duration,
        )
        .unwrap();
        let journey = Milestone::placeholder_journey(duration);
        let goal = Goal::create(GoalId::generate(), UserId::generate(), new, journey);

        prop_assert_eq!(goal.milestones().len(), duration as usize);
        for (index, milestone) in goal.milestones().iter().enumerate() {
            prop_assert_eq!(milestone.week(), index as u32 + 1);
            prop_assert_eq!(milestone.status(), MilestoneStatus::NotStarted);
        }
        prop_assert_eq!(goal.progress().value(), 0);
        prop_assert_eq!(goal.current_week(), 1);
    }
}

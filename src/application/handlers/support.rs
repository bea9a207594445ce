//! In-memory port implementations for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::checkin::Checkin;
use crate::domain::foundation::{AuthError, GoalId, StoreError, UserId};
use crate::domain::goal::{Complexity, Goal, Milestone, MilestonePlan, NewGoal};
use crate::domain::user::{EmailAddress, User};
use crate::ports::{
    CheckinRepository, GenerationError, GoalRepository, HashingError, JourneyGenerator,
    PasswordHasher, TokenService, UserRepository, CHECKIN_LIST_LIMIT, GOAL_LIST_LIMIT,
};

/// Builds a stored goal with a placeholder journey, for seeding mocks.
pub fn sample_goal(user_id: UserId, duration_weeks: u32) -> Goal {
    let new = NewGoal::new(
        "Learn Go",
        "Become productive in Go",
        "programming",
        Complexity::Beginner,
        duration_weeks,
    )
    .unwrap();
    Goal::create(
        GoalId::generate(),
        user_id,
        new,
        Milestone::placeholder_journey(duration_weeks),
    )
}

/// Goal repository backed by a vector.
#[derive(Default)]
pub struct InMemoryGoals {
    goals: Mutex<Vec<Goal>>,
    fail_with: Option<StoreError>,
}

impl InMemoryGoals {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with the given error.
    pub fn failing(err: StoreError) -> Self {
        Self {
            goals: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    /// Seeds a stored goal.
    pub fn with_goal(self, goal: Goal) -> Self {
        self.goals.lock().unwrap().push(goal);
        self
    }

    /// Snapshot of everything stored.
    pub fn stored(&self) -> Vec<Goal> {
        self.goals.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoals {
    async fn insert(&self, goal: &Goal) -> Result<(), StoreError> {
        self.check()?;
        self.goals.lock().unwrap().push(goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GoalId, owner: UserId) -> Result<Option<Goal>, StoreError> {
        self.check()?;
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id() == id && g.user_id() == owner)
            .cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Goal>, StoreError> {
        self.check()?;
        let mut owned: Vec<Goal> = self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id() == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        owned.truncate(GOAL_LIST_LIMIT);
        Ok(owned)
    }

    async fn update(&self, goal: &Goal) -> Result<bool, StoreError> {
        self.check()?;
        let mut goals = self.goals.lock().unwrap();
        match goals
            .iter_mut()
            .find(|g| g.id() == goal.id() && g.user_id() == goal.user_id())
        {
            Some(stored) => {
                *stored = goal.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: GoalId, owner: UserId) -> Result<bool, StoreError> {
        self.check()?;
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| !(g.id() == id && g.user_id() == owner));
        Ok(goals.len() < before)
    }
}

/// User repository backed by a vector.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    fail_with: Option<StoreError>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: StoreError) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.check()?;
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }
}

/// Check-in repository backed by a vector.
#[derive(Default)]
pub struct InMemoryCheckins {
    checkins: Mutex<Vec<Checkin>>,
    fail_with: Option<StoreError>,
}

impl InMemoryCheckins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: StoreError) -> Self {
        Self {
            checkins: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn with_checkin(self, checkin: Checkin) -> Self {
        self.checkins.lock().unwrap().push(checkin);
        self
    }

    pub fn stored(&self) -> Vec<Checkin> {
        self.checkins.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CheckinRepository for InMemoryCheckins {
    async fn insert(&self, checkin: &Checkin) -> Result<(), StoreError> {
        self.check()?;
        self.checkins.lock().unwrap().push(checkin.clone());
        Ok(())
    }

    async fn find_by_goal(&self, goal_id: GoalId) -> Result<Vec<Checkin>, StoreError> {
        self.check()?;
        let mut found: Vec<Checkin> = self
            .checkins
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.goal_id() == goal_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.checkin_date().cmp(&a.checkin_date()));
        found.truncate(CHECKIN_LIST_LIMIT);
        Ok(found)
    }
}

/// Journey generator with a canned answer and a call counter.
pub struct StubJourneyGenerator {
    outcome: Mutex<Result<Vec<MilestonePlan>, GenerationError>>,
    calls: AtomicUsize,
}

impl StubJourneyGenerator {
    /// Always returns the given plan.
    pub fn returning(plan: Vec<MilestonePlan>) -> Self {
        Self {
            outcome: Mutex::new(Ok(plan)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with the given error.
    pub fn failing(err: GenerationError) -> Self {
        Self {
            outcome: Mutex::new(Err(err)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `generate` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JourneyGenerator for StubJourneyGenerator {
    async fn generate(
        &self,
        _title: &str,
        _complexity: Complexity,
        _duration_weeks: u32,
    ) -> Result<Vec<MilestonePlan>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.lock().unwrap().clone()
    }
}

/// Reversible "hasher" so account tests can assert on stored values.
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> Result<String, HashingError> {
        Ok(format!("plain:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError> {
        Ok(hash == format!("plain:{}", password))
    }
}

/// Token service whose tokens embed the user id.
pub struct StaticTokenService;

impl TokenService for StaticTokenService {
    fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        Ok(format!("token-{}", user_id))
    }

    fn resolve(&self, token: &str) -> Result<UserId, AuthError> {
        let raw = token.strip_prefix("token-").ok_or(AuthError::InvalidToken)?;
        UserId::parse(raw).map_err(|_| AuthError::InvalidToken)
    }
}

//! Integration tests for the assembled HTTP API.
//!
//! These drive the complete router through `tower::ServiceExt::oneshot`
//! with in-memory stores and the real Argon2 and JWT adapters: public
//! endpoints, bearer token enforcement, and the register, create goal,
//! track milestone, check in flow a client walks through.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use goallab::adapters::ai::MockJourneyGenerator;
use goallab::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use goallab::adapters::http::{api_router, AccountHandlers, CheckinHandlers, GoalHandlers};
use goallab::application::handlers::account::{LoginUserHandler, RegisterUserHandler};
use goallab::application::handlers::checkin::{CreateCheckinHandler, GetProgressReportHandler};
use goallab::application::handlers::goal::{
    CreateGoalHandler, DeleteGoalHandler, GetGoalHandler, GetGoalProgressHandler,
    ListGoalsHandler, UpdateGoalHandler, UpdateMilestoneHandler,
};
use goallab::domain::checkin::Checkin;
use goallab::domain::foundation::{GoalId, StoreError, UserId};
use goallab::domain::goal::Goal;
use goallab::domain::user::{EmailAddress, User};
use goallab::ports::{
    CheckinRepository, GoalRepository, JourneyGenerator, PasswordHasher, UserRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory account store.
struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }
}

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

/// In-memory check-in journal.
struct InMemoryCheckinStore {
    checkins: Mutex<Vec<Checkin>>,
}

impl InMemoryCheckinStore {
    fn new() -> Self {
        Self {
            checkins: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CheckinRepository for InMemoryCheckinStore {
    async fn insert(&self, checkin: &Checkin) -> Result<(), StoreError> {
        self.checkins.lock().unwrap().push(checkin.clone());
        Ok(())
    }

    async fn find_by_goal(&self, goal_id: GoalId) -> Result<Vec<Checkin>, StoreError> {
        let mut checkins: Vec<Checkin> = self
            .checkins
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.goal_id() == goal_id)
            .cloned()
            .collect();
        checkins.sort_by(|a, b| b.checkin_date().as_datetime().cmp(a.checkin_date().as_datetime()));
        Ok(checkins)
    }
}

/// Assembles the full router over in-memory stores.
///
/// The journey generator has no queued outcomes, so every goal creation
/// falls back to the placeholder journey.
fn app() -> Router {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());
    let goals: Arc<dyn GoalRepository> = Arc::new(InMemoryGoalStore::new());
    let checkins: Arc<dyn CheckinRepository> = Arc::new(InMemoryCheckinStore::new());
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let tokens = Arc::new(JwtTokenService::new("http-test-secret", 3600));
    let generator: Arc<dyn JourneyGenerator> = Arc::new(MockJourneyGenerator::new());

    let account_handlers = AccountHandlers::new(
        Arc::new(RegisterUserHandler::new(
            users.clone(),
            hasher.clone(),
            tokens.clone(),
        )),
        Arc::new(LoginUserHandler::new(users, hasher, tokens.clone())),
    );
    let goal_handlers = GoalHandlers::new(
        Arc::new(CreateGoalHandler::new(goals.clone(), generator)),
        Arc::new(ListGoalsHandler::new(goals.clone())),
        Arc::new(GetGoalHandler::new(goals.clone())),
        Arc::new(UpdateGoalHandler::new(goals.clone())),
        Arc::new(DeleteGoalHandler::new(goals.clone())),
        Arc::new(UpdateMilestoneHandler::new(goals.clone())),
        Arc::new(GetGoalProgressHandler::new(goals.clone())),
    );
    let checkin_handlers = CheckinHandlers::new(
        Arc::new(CreateCheckinHandler::new(checkins.clone())),
        Arc::new(GetProgressReportHandler::new(goals, checkins)),
    );

    api_router(
        account_handlers,
        goal_handlers,
        checkin_handlers,
        tokens,
        Duration::from_secs(5),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Registers an account and returns the issued bearer token.
async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({
                "name": "Dana Whitfield",
                "email": email,
                "password": "correct horse battery staple",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["access_token"].as_str().unwrap().to_string()
}

/// Creates a four week goal and returns its id.
async fn create_goal(app: &Router, token: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/goals",
            Some(token),
            json!({
                "title": "Learn Go",
                "description": "Become productive in Go within a month",
                "category": "programming",
                "complexity": "intermediate",
                "duration": 4,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["goal"]["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Public endpoints
// =============================================================================

#[tokio::test]
async fn health_and_root_respond_without_a_token() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, request("GET", "/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "AI Learning Tutor API");
}

#[tokio::test]
async fn routes_needing_identity_reject_missing_and_bad_tokens() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/api/goals", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Authentication required");

    let (status, body) = send(&app, request("GET", "/api/goals", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid token");
}

// =============================================================================
// Goal lifecycle over HTTP
// =============================================================================

#[tokio::test]
async fn register_create_and_list_goals_with_the_issued_token() {
    let app = app();
    let token = register(&app, "dana@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/goals",
            Some(&token),
            json!({
                "title": "Learn Go",
                "description": "Become productive in Go within a month",
                "category": "programming",
                "complexity": "intermediate",
                "duration": 4,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let goal = &body["goal"];
    assert_eq!(goal["title"], "Learn Go");
    assert_eq!(goal["complexity"], "intermediate");
    assert_eq!(goal["duration"], 4);
    assert_eq!(goal["progress"], 0);
    assert_eq!(goal["status"], "not_started");
    assert_eq!(goal["current_week"], 1);

    // The generator has nothing queued, so the placeholder journey fills in.
    let milestones = goal["milestones"].as_array().unwrap();
    assert_eq!(milestones.len(), 4);
    assert_eq!(milestones[0]["week"], 1);
    assert_eq!(milestones[0]["objective"], "Week 1 learning");
    assert_eq!(milestones[0]["status"], "not_started");
    assert_eq!(milestones[3]["objective"], "Week 4 learning");

    let (status, body) = send(&app, request("GET", "/api/goals", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let goals = body["goals"].as_array().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["id"], goal["id"]);

    let uri = format!("/api/goals/{}", goal["id"].as_str().unwrap());
    let (status, body) = send(&app, request("GET", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goal"]["title"], "Learn Go");
}

#[tokio::test]
async fn milestone_updates_change_the_progress_summary_over_http() {
    let app = app();
    let token = register(&app, "dana@example.com").await;
    let goal_id = create_goal(&app, &token).await;

    let uri = format!("/api/goals/{}/milestone/2", goal_id);
    let (status, body) = send(
        &app,
        json_request("PUT", &uri, Some(&token), json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Milestone updated successfully");

    let uri = format!("/api/goals/{}/progress", goal_id);
    let (status, body) = send(&app, request("GET", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress"], 25);
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["current_week"], 2);
    assert_eq!(body["milestones"]["total"], 4);
    assert_eq!(body["milestones"]["completed"], 1);
    assert_eq!(body["milestones"]["not_started"], 3);

    // A week outside the journey is a 404, not a silent no-op.
    let uri = format!("/api/goals/{}/milestone/9", goal_id);
    let (status, body) = send(
        &app,
        json_request("PUT", &uri, Some(&token), json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn updating_a_goal_rejects_an_explicit_null_field() {
    let app = app();
    let token = register(&app, "dana@example.com").await;
    let goal_id = create_goal(&app, &token).await;

    let uri = format!("/api/goals/{}", goal_id);
    let (status, body) = send(
        &app,
        json_request("PUT", &uri, Some(&token), json!({"title": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("null"));

    let (status, body) = send(
        &app,
        json_request("PUT", &uri, Some(&token), json!({"title": "Master Go"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goal"]["title"], "Master Go");
}

#[tokio::test]
async fn a_malformed_goal_id_is_a_bad_request() {
    let app = app();
    let token = register(&app, "dana@example.com").await;

    let (status, body) = send(&app, request("GET", "/api/goals/not-hex", Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ID");
    assert_eq!(body["message"], "Invalid goal ID");
}

#[tokio::test]
async fn deleting_a_goal_removes_it_from_the_listing() {
    let app = app();
    let token = register(&app, "dana@example.com").await;
    let goal_id = create_goal(&app, &token).await;

    let uri = format!("/api/goals/{}", goal_id);
    let (status, body) = send(&app, request("DELETE", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Goal deleted successfully");
    assert_eq!(body["deleted_id"], goal_id.as_str());

    let (status, body) = send(&app, request("GET", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = send(&app, request("GET", "/api/goals", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["goals"].as_array().unwrap().is_empty());
}

// =============================================================================
// Check-ins and progress reports
// =============================================================================

#[tokio::test]
async fn checkins_append_and_feed_the_progress_report() {
    let app = app();
    let token = register(&app, "dana@example.com").await;
    let goal_id = create_goal(&app, &token).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/checkins",
            Some(&token),
            json!({
                "goal_id": goal_id,
                "progress_notes": "Wrote the first CLI",
                "completed_milestones": ["Week 1 learning"],
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Check-in recorded successfully");

    let uri = format!("/api/goals/{}/milestone/1", goal_id);
    let (status, _body) = send(
        &app,
        json_request("PUT", &uri, Some(&token), json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/progress/{}", goal_id);
    let (status, body) = send(&app, request("GET", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goal"]["id"], goal_id.as_str());

    let checkins = body["checkins"].as_array().unwrap();
    assert_eq!(checkins.len(), 1);
    assert_eq!(checkins[0]["progress_notes"], "Wrote the first CLI");
    assert_eq!(checkins[0]["completed_milestones"][0], "Week 1 learning");

    // One of four milestones done in the first week.
    let metrics = &body["progress_metrics"];
    assert!((metrics["completion_rate"].as_f64().unwrap() - 0.25).abs() < 1e-9);
    assert!((metrics["velocity"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn a_progress_report_for_a_missing_goal_is_not_found() {
    let app = app();
    let token = register(&app, "dana@example.com").await;

    let uri = format!("/api/progress/{}", GoalId::generate());
    let (status, body) = send(&app, request("GET", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

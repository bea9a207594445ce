//! GoalLab service entrypoint: configuration, wiring, and the axum server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use goallab::adapters::ai::{DisabledJourneyGenerator, OpenAiConfig, OpenAiJourneyGenerator};
use goallab::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use goallab::adapters::http::{api_router, AccountHandlers, CheckinHandlers, GoalHandlers};
use goallab::adapters::postgres::{
    PostgresCheckinRepository, PostgresGoalRepository, PostgresUserRepository,
};
use goallab::application::handlers::account::{LoginUserHandler, RegisterUserHandler};
use goallab::application::handlers::checkin::{CreateCheckinHandler, GetProgressReportHandler};
use goallab::application::handlers::goal::{
    CreateGoalHandler, DeleteGoalHandler, GetGoalHandler, GetGoalProgressHandler, ListGoalsHandler,
    UpdateGoalHandler, UpdateMilestoneHandler,
};
use goallab::config::AppConfig;
use goallab::ports::{
    CheckinRepository, GoalRepository, JourneyGenerator, PasswordHasher, TokenService,
    UserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server.log_level);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let router = build_router(&config, pool);

    let addr = config.server.socket_addr();
    tracing::info!(environment = ?config.server.environment, "Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Wires repositories, adapters, and handlers into the full router.
fn build_router(config: &AppConfig, pool: PgPool) -> axum::Router {
    let goals: Arc<dyn GoalRepository> = Arc::new(PostgresGoalRepository::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let checkins: Arc<dyn CheckinRepository> = Arc::new(PostgresCheckinRepository::new(pool));

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_config(&config.auth));

    let generator: Arc<dyn JourneyGenerator> = match config
        .ai
        .openai_api_key
        .as_deref()
        .filter(|key| !key.is_empty())
    {
        Some(api_key) => {
            let ai_config = OpenAiConfig::new(api_key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout());
            Arc::new(OpenAiJourneyGenerator::new(ai_config))
        }
        None => {
            tracing::warn!("No generator API key configured; goals get the placeholder journey");
            Arc::new(DisabledJourneyGenerator::new())
        }
    };

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
        Duration::from_secs(config.server.request_timeout_secs),
    )
}

use api::routes::routes;
use axum::Router;
use util::{config::AppConfig, state::AppState};

/// Builds the application router against a fresh, fully migrated in-memory
/// database. Each call returns an isolated app; tests never share state.
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::set_jwt_secret("originality-test-secret");
    AppConfig::set_jwt_duration_minutes(60u64);

    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let app = Router::new().nest("/api", routes(app_state.clone()));
    (app, app_state)
}

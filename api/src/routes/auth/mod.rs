use axum::{Router, routing::post};
use post::login;
use util::state::AppState;

pub mod post;

/// Builds the `/auth` route group.
///
/// Routes:
/// - `POST /auth/login` → Authenticate and receive a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

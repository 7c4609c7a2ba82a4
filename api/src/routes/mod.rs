//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Authentication endpoints (login, public)
//! - `/assignments` → Submission originality reports (authenticated users)

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    assignments::assignments_routes, auth::auth_routes, health::health_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod assignments;
pub mod auth;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The `/assignments` group sits behind the authentication guard; every
/// other check (ownership, capability, feature flag) is made explicitly by
/// the handlers themselves.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/assignments",
            assignments_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}

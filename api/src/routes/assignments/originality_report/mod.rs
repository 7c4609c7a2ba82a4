use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds the originality-report route group, mounted under
/// `/assignments/{assignment_id}/submissions/{submission_id}/originality_report`.
pub fn originality_report_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(post::create_originality_report))
        .route("/{report_id}", get(get::get_originality_report))
}

use axum::Router;
use originality_report::originality_report_routes;
use util::state::AppState;

pub mod originality_report;

/// Builds the `/assignments` route group.
///
/// Routes:
/// - `POST /assignments/{assignment_id}/submissions/{submission_id}/originality_report` → Create an originality report
/// - `GET  /assignments/{assignment_id}/submissions/{submission_id}/originality_report/{report_id}` → Fetch an originality report
pub fn assignments_routes() -> Router<AppState> {
    Router::new().nest(
        "/{assignment_id}/submissions/{submission_id}/originality_report",
        originality_report_routes(),
    )
}

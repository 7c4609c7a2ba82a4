use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{
    assignment::Entity as AssignmentEntity, originality_report::Model as ReportModel,
    submission::Entity as SubmissionEntity,
};
use sea_orm::EntityTrait;
use util::state::AppState;

use super::common::{OriginalityReportResponse, check_report_gates, lookup_failed, not_found};
use crate::auth::AuthUser;

/// GET /api/assignments/{assignment_id}/submissions/{submission_id}/originality_report/{report_id}
///
/// Fetches a previously created originality report. Subject to the same
/// gates as creation: the caller needs manage-grades over the assignment's
/// course and the course needs plagiarism detection enabled.
///
/// # Returns
///
/// - `200 OK` with the bare serialized report
/// - `403 Forbidden` with an empty body when a gate fails
/// - `404 Not Found` when the assignment, submission or report does not
///   exist, or the report does not belong to the path submission
pub async fn get_originality_report(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path((assignment_id, submission_id, report_id)): Path<(i64, i64, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    let assignment = match AssignmentEntity::find_by_id(assignment_id).one(db).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => return not_found(format!("Assignment {} not found.", assignment_id)),
        Err(_) => return lookup_failed("assignment"),
    };

    let submission = match SubmissionEntity::find_by_id(submission_id).one(db).await {
        Ok(Some(submission)) => submission,
        Ok(None) => return not_found(format!("Submission {} not found.", submission_id)),
        Err(_) => return lookup_failed("submission"),
    };

    if submission.assignment_id != assignment.id {
        return not_found(format!(
            "Submission {} in Assignment {} not found.",
            submission_id, assignment_id
        ));
    }

    if let Err(response) = check_report_gates(db, claims.sub, assignment.course_id).await {
        return response;
    }

    match ReportModel::find_for_submission(db, submission.id, report_id).await {
        Ok(Some(report)) => {
            (StatusCode::OK, Json(OriginalityReportResponse::from(report))).into_response()
        }
        Ok(None) => not_found(format!("Originality report {} not found.", report_id)),
        Err(_) => lookup_failed("originality report"),
    }
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{
    assignment::Entity as AssignmentEntity,
    originality_report::{CreateReportError, Model as ReportModel},
    submission::Entity as SubmissionEntity,
    submission_attachment::Entity as AttachmentEntity,
};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use util::state::AppState;

use super::common::{OriginalityReportResponse, check_report_gates, lookup_failed, not_found};
use crate::auth::AuthUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOriginalityReportPayload {
    pub originality_report: OriginalityReportParams,
}

/// Allow-listed fields of the `originality_report` body object. Anything
/// outside this set is rejected at deserialization time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginalityReportParams {
    pub file_id: i64,
    pub originality_score: f64,
    #[serde(default)]
    pub originality_report_file_id: Option<i64>,
    #[serde(default)]
    pub originality_report_url: Option<String>,
    #[serde(default)]
    pub originality_report_lti_url: Option<String>,
}

/// POST /api/assignments/{assignment_id}/submissions/{submission_id}/originality_report
///
/// Records a plagiarism-detection score for one file of a submission.
/// Intended for plagiarism-detection tools scoring files on behalf of
/// teaching staff; the caller must hold manage-grades over the assignment's
/// course, and the course must have plagiarism detection enabled.
///
/// # Path Parameters
///
/// - `assignment_id`: The assignment the submission was made for
/// - `submission_id`: The submission containing the scored file
///
/// # Request Body
///
/// A JSON object with a single `originality_report` key:
/// - `file_id`: ID of the submission attachment being scored (required)
/// - `originality_score`: A number between 0 and 1 (required)
/// - `originality_report_file_id`: ID of a file containing the rendered report document
/// - `originality_report_url`: URL of an externally hosted report view
/// - `originality_report_lti_url`: URL of a tool-launch view of the report
///
/// # Returns
///
/// - `201 Created` with the bare serialized report
/// - `400 Bad Request` with a map of field name → error messages, for a
///   duplicate report (keyed `base`) or an out-of-range score
/// - `401 Unauthorized` with an empty body when the submission does not
///   belong to the assignment, or the file is not among the submission's
///   attachments — regardless of the caller's permissions
/// - `403 Forbidden` with an empty body when the caller lacks manage-grades
///   or the course has plagiarism detection disabled
/// - `404 Not Found` when the referenced assignment, file or submission
///   does not exist
///
/// # Example Request
///
/// ```json
/// {
///   "originality_report": {
///     "file_id": 8,
///     "originality_score": 0.16,
///     "originality_report_url": "http://www.example.com/report"
///   }
/// }
/// ```
///
/// # Example Response (201 Created)
///
/// ```json
/// {
///   "id": 4,
///   "file_id": 8,
///   "originality_score": 0.16,
///   "originality_report_file_id": null,
///   "originality_report_url": "http://www.example.com/report",
///   "originality_report_lti_url": null
/// }
/// ```
///
/// # Example Response (400 Bad Request, duplicate)
///
/// ```json
/// {
///   "base": ["the specified file with file_id already has an originality report"]
/// }
/// ```
pub async fn create_originality_report(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path((assignment_id, submission_id)): Path<(i64, i64)>,
    Json(payload): Json<CreateOriginalityReportPayload>,
) -> impl IntoResponse {
    let db = app_state.db();
    let params = payload.originality_report;

    let assignment = match AssignmentEntity::find_by_id(assignment_id).one(db).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => return not_found(format!("Assignment {} not found.", assignment_id)),
        Err(_) => return lookup_failed("assignment"),
    };

    let attachment = match AttachmentEntity::find_by_id(params.file_id).one(db).await {
        Ok(Some(attachment)) => attachment,
        Ok(None) => return not_found(format!("File {} not found.", params.file_id)),
        Err(_) => return lookup_failed("file"),
    };

    let submission = match SubmissionEntity::find_by_id(submission_id).one(db).await {
        Ok(Some(submission)) => submission,
        Ok(None) => return not_found(format!("Submission {} not found.", submission_id)),
        Err(_) => return lookup_failed("submission"),
    };

    // The submission must belong to the path assignment and the file to the
    // submission. A mismatch is unauthorized no matter who asks.
    if submission.assignment_id != assignment.id || attachment.submission_id != submission.id {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if let Err(response) = check_report_gates(db, claims.sub, assignment.course_id).await {
        return response;
    }

    match ReportModel::create_report(
        db,
        submission.id,
        params.file_id,
        params.originality_score,
        params.originality_report_file_id,
        params.originality_report_url.as_deref(),
        params.originality_report_lti_url.as_deref(),
    )
    .await
    {
        Ok(report) => (
            StatusCode::CREATED,
            Json(OriginalityReportResponse::from(report)),
        )
            .into_response(),
        Err(err @ CreateReportError::Duplicate) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "base": [err.to_string()] })),
        )
            .into_response(),
        Err(err @ CreateReportError::ScoreOutOfRange(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "originality_score": [err.to_string()] })),
        )
            .into_response(),
        Err(CreateReportError::Db(err)) => {
            tracing::error!(
                error = %err,
                submission_id,
                file_id = params.file_id,
                "Failed to create originality report"
            );
            lookup_failed("originality report")
        }
    }
}

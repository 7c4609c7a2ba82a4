use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{
    course_feature::{Feature, Model as CourseFeatureModel},
    originality_report,
    user_course_role::Model as UserCourseRoleModel,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// External wire shape of an originality report. Used verbatim by both the
/// create and the fetch endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct OriginalityReportResponse {
    pub id: i64,
    pub file_id: i64,
    pub originality_score: f64,
    pub originality_report_file_id: Option<i64>,
    pub originality_report_url: Option<String>,
    pub originality_report_lti_url: Option<String>,
}

impl From<originality_report::Model> for OriginalityReportResponse {
    fn from(report: originality_report::Model) -> Self {
        Self {
            id: report.id,
            file_id: report.file_id,
            originality_score: report.originality_score,
            originality_report_file_id: report.originality_report_file_id,
            originality_report_url: report.originality_report_url,
            originality_report_lti_url: report.originality_report_lti_url,
        }
    }
}

/// Enforces the two gates shared by the originality-report endpoints: the
/// caller must hold manage-grades over the course, and the course must have
/// plagiarism detection switched on. Either failing ends the request with an
/// empty `403 Forbidden`.
pub async fn check_report_gates(
    db: &DatabaseConnection,
    user_id: i64,
    course_id: i64,
) -> Result<(), Response> {
    match UserCourseRoleModel::can_manage_grades(db, user_id, course_id).await {
        Ok(true) => {}
        Ok(false) => return Err(StatusCode::FORBIDDEN.into_response()),
        Err(err) => {
            tracing::error!(error = %err, user_id, course_id, "Role lookup failed");
            return Err(lookup_failed("role"));
        }
    }

    match CourseFeatureModel::is_enabled(db, course_id, Feature::PlagiarismDetection).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::FORBIDDEN.into_response()),
        Err(err) => {
            tracing::error!(error = %err, course_id, "Feature flag lookup failed");
            Err(lookup_failed("feature flag"))
        }
    }
}

/// Standard response for a database failure during one of the entity lookups.
pub fn lookup_failed(entity: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<Empty>::error(format!(
            "Database error while checking {entity}"
        ))),
    )
        .into_response()
}

/// Standard `404 Not Found` response in the service envelope.
pub fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Empty>::error(message)),
    )
        .into_response()
}

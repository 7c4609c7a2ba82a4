//! Entity and persistence logic for originality reports.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use thiserror::Error;

/// A plagiarism-detection score attached to one file of a submission.
///
/// At most one report may exist per `(submission_id, file_id)` pair; the
/// unique index on those columns is the only duplicate guard, so concurrent
/// creates race at the storage layer and exactly one wins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "originality_reports")]
pub struct Model {
    /// Primary key for the report.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Submission the scored file belongs to.
    pub submission_id: i64,

    /// The attachment receiving the originality score.
    pub file_id: i64,

    /// Score in [0, 1]; lower means less original.
    pub originality_score: f64,

    /// File holding the rendered report document, if the tool uploaded one.
    pub originality_report_file_id: Option<i64>,

    /// Externally hosted view of the report.
    pub originality_report_url: Option<String>,

    /// Tool-launch view of the report. Consumers prefer this over
    /// `originality_report_url` when both are present.
    pub originality_report_lti_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submission::Entity",
        from = "Column::SubmissionId",
        to = "super::submission::Column::Id"
    )]
    Submission,

    #[sea_orm(
        belongs_to = "super::submission_attachment::Entity",
        from = "Column::FileId",
        to = "super::submission_attachment::Column::Id"
    )]
    Attachment,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Failure modes of [`Model::create_report`].
///
/// Callers must be able to tell a duplicate apart from any other database
/// failure, so the unique-constraint violation is lifted into its own
/// variant instead of surfacing as a bare `DbErr`.
#[derive(Debug, Error)]
pub enum CreateReportError {
    #[error("originality_score must be between 0 and 1")]
    ScoreOutOfRange(f64),

    #[error("the specified file with file_id already has an originality report")]
    Duplicate,

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Model {
    /// Persists a new originality report for `(submission_id, file_id)`.
    ///
    /// The score must lie in [0, 1]. Duplicates are rejected by the unique
    /// index and reported as [`CreateReportError::Duplicate`].
    pub async fn create_report(
        db: &DatabaseConnection,
        submission_id: i64,
        file_id: i64,
        originality_score: f64,
        originality_report_file_id: Option<i64>,
        originality_report_url: Option<&str>,
        originality_report_lti_url: Option<&str>,
    ) -> Result<Model, CreateReportError> {
        if !(0.0..=1.0).contains(&originality_score) {
            return Err(CreateReportError::ScoreOutOfRange(originality_score));
        }

        let now = Utc::now();
        let report = ActiveModel {
            submission_id: Set(submission_id),
            file_id: Set(file_id),
            originality_score: Set(originality_score),
            originality_report_file_id: Set(originality_report_file_id),
            originality_report_url: Set(originality_report_url.map(str::to_string)),
            originality_report_lti_url: Set(originality_report_lti_url.map(str::to_string)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match report.insert(db).await {
            Ok(model) => Ok(model),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(CreateReportError::Duplicate),
                _ => Err(CreateReportError::Db(err)),
            },
        }
    }

    /// Finds a report by id, scoped to the submission it was created for.
    pub async fn find_for_submission(
        db: &DatabaseConnection,
        submission_id: i64,
        report_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(report_id)
            .filter(Column::SubmissionId.eq(submission_id))
            .one(db)
            .await
    }
}

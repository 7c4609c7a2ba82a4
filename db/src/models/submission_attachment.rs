use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde::Serialize;

/// A file attached to a submission. Originality reports score exactly one of
/// these per report.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submission_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
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
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        submission_id: i64,
        filename: &str,
        content_type: Option<&str>,
        size_bytes: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let attachment = ActiveModel {
            submission_id: Set(submission_id),
            filename: Set(filename.to_string()),
            content_type: Set(content_type.map(str::to_string)),
            size_bytes: Set(size_bytes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        attachment.insert(db).await
    }
}

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde::Serialize;

/// Represents a course. Courses are the authorization context for
/// role and feature-flag checks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Course code (e.g., "CS101").
    pub code: String,
    pub title: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        code: &str,
        title: &str,
        year: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            code: Set(code.to_string()),
            title: Set(title.to_string()),
            year: Set(year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }
}

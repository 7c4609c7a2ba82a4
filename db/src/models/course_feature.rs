use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};

/// Per-course feature toggle. A feature with no row is disabled.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_features")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub feature: Feature,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Feature keys known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Feature {
    /// Gates the originality-report endpoints.
    #[sea_orm(string_value = "plagiarism_detection")]
    PlagiarismDetection,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the feature is switched on for the course.
    pub async fn is_enabled(
        db: &DatabaseConnection,
        course_id: i64,
        feature: Feature,
    ) -> Result<bool, DbErr> {
        Ok(Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Feature.eq(feature))
            .one(db)
            .await?
            .map(|f| f.enabled)
            .unwrap_or(false))
    }

    /// Switches the feature on or off for the course, inserting the row if it
    /// does not exist yet.
    pub async fn set_enabled(
        db: &DatabaseConnection,
        course_id: i64,
        feature: Feature,
        enabled: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        match Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Feature.eq(feature))
            .one(db)
            .await?
        {
            Some(existing) => {
                let mut flag = existing.into_active_model();
                flag.enabled = Set(enabled);
                flag.updated_at = Set(now);
                flag.update(db).await
            }
            None => {
                let flag = ActiveModel {
                    course_id: Set(course_id),
                    feature: Set(feature),
                    enabled: Set(enabled),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                flag.insert(db).await
            }
        }
    }
}

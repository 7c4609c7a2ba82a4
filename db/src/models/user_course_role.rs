use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The central table for user-course-role relationships.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_course_roles")]
pub struct Model {
    /// User ID (foreign key to `users`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    /// Course ID (foreign key to `courses`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,

    /// Role the user holds within the course.
    pub role: Role,
}

/// Enum representing user roles within a course.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "teacher")]
    Teacher,

    #[sea_orm(string_value = "ta")]
    Ta,

    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "observer")]
    Observer,
}

impl Role {
    /// Whether this role carries the manage-grades capability for its course.
    /// Teaching staff only; students and observers never qualify.
    pub fn can_manage_grades(&self) -> bool {
        matches!(self, Role::Teacher | Role::Ta)
    }
}

/// Defines relationships for foreign key joins.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

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
    pub async fn assign_user_to_course(
        db: &DatabaseConnection,
        user_id: i64,
        course_id: i64,
        role: Role,
    ) -> Result<Model, DbErr> {
        let membership = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            role: Set(role),
        };

        membership.insert(db).await
    }

    /// Returns the role the user holds in the course, if any.
    pub async fn role_of(
        db: &DatabaseConnection,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Role>, DbErr> {
        Ok(Entity::find_by_id((user_id, course_id))
            .one(db)
            .await?
            .map(|m| m.role))
    }

    /// Whether the user holds the manage-grades capability over the course.
    /// Users with no role in the course do not.
    pub async fn can_manage_grades(
        db: &DatabaseConnection,
        user_id: i64,
        course_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Self::role_of(db, user_id, course_id)
            .await?
            .is_some_and(|role| role.can_manage_grades()))
    }
}

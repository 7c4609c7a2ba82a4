use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608060001_create_users::Migration),
            Box::new(migrations::m202608060002_create_courses::Migration),
            Box::new(migrations::m202608060003_create_user_course_roles::Migration),
            Box::new(migrations::m202608060004_create_course_features::Migration),
            Box::new(migrations::m202608060005_create_assignments::Migration),
            Box::new(migrations::m202608060006_create_submissions::Migration),
            Box::new(migrations::m202608060007_create_submission_attachments::Migration),
            Box::new(migrations::m202608060008_create_originality_reports::Migration),
        ]
    }
}

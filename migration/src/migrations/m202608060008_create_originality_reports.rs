use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608060008_create_originality_reports"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("originality_reports"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("submission_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("file_id")).big_integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("originality_score"))
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("originality_report_file_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("originality_report_url")).string())
                    .col(ColumnDef::new(Alias::new("originality_report_lti_url")).string())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_originality_reports_submission")
                            .from(Alias::new("originality_reports"), Alias::new("submission_id"))
                            .to(Alias::new("submissions"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_originality_reports_file")
                            .from(Alias::new("originality_reports"), Alias::new("file_id"))
                            .to(
                                Alias::new("submission_attachments"),
                                Alias::new("id"),
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One report per (submission, file); duplicate creates must fail at
        // the storage layer, not by a racy pre-read.
        manager
            .create_index(
                Index::create()
                    .name("uq_originality_reports_submission_file")
                    .if_not_exists()
                    .table(Alias::new("originality_reports"))
                    .col(Alias::new("submission_id"))
                    .col(Alias::new("file_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("originality_reports"))
                    .to_owned(),
            )
            .await
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Merges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Merges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Merges::FromCourseId).integer().not_null())
                    .col(ColumnDef::new(Merges::ToCourseId).integer().not_null())
                    .col(
                        ColumnDef::new(Merges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Merges::Table, Merges::FromCourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Merges::Table, Merges::ToCourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Merges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Merges {
    Table,
    Id,
    FromCourseId,
    ToCourseId,
    CreatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}

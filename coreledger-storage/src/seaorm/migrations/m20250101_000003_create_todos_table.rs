use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ToDos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ToDos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ToDos::Description).string_len(500).not_null())
                    .col(
                        ColumnDef::new(ToDos::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ToDos::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(ToDos::UpdatedAt).timestamp().null())
                    .col(ColumnDef::new(ToDos::CompletedAt).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ToDos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ToDos {
    #[sea_orm(iden = "todos")]
    Table,
    Id,
    Description,
    IsCompleted,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ACCOUNT_INDEXES: [(&str, Accounts); 3] = [
    ("idx_accounts_type_id", Accounts::TypeId),
    ("idx_accounts_status", Accounts::Status),
    ("idx_accounts_name", Accounts::Name),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, column) in ACCOUNT_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Accounts::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        // Listing todos newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_todos_created_at")
                    .table(ToDos::Table)
                    .col(ToDos::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_todos_created_at").table(ToDos::Table).to_owned())
            .await?;

        for (name, _) in ACCOUNT_INDEXES.into_iter().rev() {
            manager
                .drop_index(Index::drop().name(name).table(Accounts::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Accounts {
    Table,
    TypeId,
    Status,
    Name,
}

#[derive(DeriveIden)]
enum ToDos {
    #[sea_orm(iden = "todos")]
    Table,
    CreatedAt,
}

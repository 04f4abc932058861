use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Code).big_integer().not_null().unique_key())
                    .col(ColumnDef::new(Accounts::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Accounts::TypeId).integer().not_null())
                    .col(ColumnDef::new(Accounts::Status).integer().not_null())
                    .col(ColumnDef::new(Accounts::NormalBalance).integer().not_null())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Accounts::UpdatedAt).timestamp().null())
                    .col(ColumnDef::new(Accounts::DeactivatedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_type_id")
                            .from(Accounts::Table, Accounts::TypeId)
                            .to(AccountTypes::Table, AccountTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Code,
    Name,
    TypeId,
    Status,
    NormalBalance,
    CreatedAt,
    UpdatedAt,
    DeactivatedAt,
}

#[derive(DeriveIden)]
enum AccountTypes {
    Table,
    Id,
}

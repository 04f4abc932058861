use coreledger_core::{Account, AccountStatus, NormalBalance};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

/// Account status stored as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AccountStatusColumn {
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Inactive,
}

/// Normal balance stored as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum NormalBalanceColumn {
    #[sea_orm(num_value = 1)]
    Debit,
    #[sea_orm(num_value = 2)]
    Credit,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Business identifier, unique across accounts
    #[sea_orm(unique)]
    pub code: i64,

    pub name: String,

    /// Foreign key to account_types
    pub type_id: i32,

    pub status: AccountStatusColumn,

    pub normal_balance: NormalBalanceColumn,

    pub created_at: ChronoDateTimeUtc,

    pub updated_at: Option<ChronoDateTimeUtc>,

    pub deactivated_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_types::Entity",
        from = "Column::TypeId",
        to = "super::account_types::Column::Id",
        on_delete = "Restrict"
    )]
    AccountType,
}

impl Related<super::account_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<AccountStatus> for AccountStatusColumn {
    fn from(status: AccountStatus) -> Self {
        match status {
            AccountStatus::Active => AccountStatusColumn::Active,
            AccountStatus::Inactive => AccountStatusColumn::Inactive,
        }
    }
}

impl From<AccountStatusColumn> for AccountStatus {
    fn from(status: AccountStatusColumn) -> Self {
        match status {
            AccountStatusColumn::Active => AccountStatus::Active,
            AccountStatusColumn::Inactive => AccountStatus::Inactive,
        }
    }
}

impl From<NormalBalance> for NormalBalanceColumn {
    fn from(normal_balance: NormalBalance) -> Self {
        match normal_balance {
            NormalBalance::Debit => NormalBalanceColumn::Debit,
            NormalBalance::Credit => NormalBalanceColumn::Credit,
        }
    }
}

impl From<NormalBalanceColumn> for NormalBalance {
    fn from(normal_balance: NormalBalanceColumn) -> Self {
        match normal_balance {
            NormalBalanceColumn::Debit => NormalBalance::Debit,
            NormalBalanceColumn::Credit => NormalBalance::Credit,
        }
    }
}

impl Model {
    /// Convert to the domain entity, attaching the loaded type description
    pub fn into_account(self, type_description: Option<String>) -> Account {
        Account {
            id: self.id,
            code: self.code,
            name: self.name,
            type_id: self.type_id,
            type_description,
            status: self.status.into(),
            normal_balance: self.normal_balance.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deactivated_at: self.deactivated_at,
        }
    }
}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        Self {
            id: if account.id > 0 { Set(account.id) } else { ActiveValue::NotSet },
            code: Set(account.code),
            name: Set(account.name.clone()),
            type_id: Set(account.type_id),
            status: Set(account.status.into()),
            normal_balance: Set(account.normal_balance.into()),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
            deactivated_at: Set(account.deactivated_at),
        }
    }
}

use coreledger_core::AccountType;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

/// Account classification, e.g. assets or liabilities
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub description: String,

    pub created_at: ChronoDateTimeUtc,

    pub updated_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accounts::Entity")]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AccountType {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&AccountType> for ActiveModel {
    fn from(account_type: &AccountType) -> Self {
        Self {
            id: if account_type.id > 0 {
                Set(account_type.id)
            } else {
                ActiveValue::NotSet
            },
            description: Set(account_type.description.clone()),
            created_at: Set(account_type.created_at),
            updated_at: Set(account_type.updated_at),
        }
    }
}

use crate::seaorm::{
    connection::DatabaseConnection,
    entities::{AccountTypeActiveModel, AccountTypeColumn, AccountTypes},
};
use async_trait::async_trait;
use coreledger_core::{AccountType, FaultResult};
use coreledger_interfaces::AccountTypeRepository;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder};

/// SeaORM-backed account type storage
#[derive(Clone)]
pub struct SeaOrmAccountTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountTypeRepository for SeaOrmAccountTypeRepository {
    async fn find_all(&self) -> FaultResult<Vec<AccountType>> {
        let query = AccountTypes::find()
            .order_by_asc(AccountTypeColumn::Id)
            .all(self.db.get_connection());
        let types = self.db.run("find_account_types", query).await?;
        Ok(types.into_iter().map(AccountType::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> FaultResult<Option<AccountType>> {
        let query = AccountTypes::find_by_id(id).one(self.db.get_connection());
        let account_type = self.db.run("find_account_type", query).await?;
        Ok(account_type.map(AccountType::from))
    }

    async fn find_by_description(&self, description: &str) -> FaultResult<Option<AccountType>> {
        let query = AccountTypes::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((AccountTypes, AccountTypeColumn::Description))))
                    .eq(description.trim().to_lowercase()),
            )
            .one(self.db.get_connection());
        let account_type = self.db.run("find_account_type_by_description", query).await?;
        Ok(account_type.map(AccountType::from))
    }

    async fn create(&self, account_type: AccountType) -> FaultResult<AccountType> {
        let insert = AccountTypeActiveModel::from(&account_type).insert(self.db.get_connection());
        let model = self.db.run("create_account_type", insert).await?;
        Ok(model.into())
    }

    async fn update(&self, account_type: AccountType) -> FaultResult<AccountType> {
        let update = AccountTypeActiveModel::from(&account_type).update(self.db.get_connection());
        let model = self.db.run("update_account_type", update).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> FaultResult<bool> {
        let delete = AccountTypes::delete_by_id(id).exec(self.db.get_connection());
        let result = self.db.run("delete_account_type", delete).await?;
        Ok(result.rows_affected > 0)
    }
}

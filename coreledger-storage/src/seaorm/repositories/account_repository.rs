use crate::seaorm::{
    connection::DatabaseConnection,
    entities::{
        AccountActiveModel, AccountColumn, AccountModel, AccountStatusColumn, AccountTypeColumn, AccountTypeModel,
        AccountTypes, Accounts,
    },
    filters::AccountQueryBuilder,
};
use async_trait::async_trait;
use coreledger_api_types::{AccountsByTypeReportDto, Page};
use coreledger_core::{Account, FaultResult, QuerySpec};
use coreledger_interfaces::AccountRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use tracing::debug;

/// SeaORM-backed account storage
#[derive(Clone)]
pub struct SeaOrmAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn with_type(row: (AccountModel, Option<AccountTypeModel>)) -> Account {
    let (account, account_type) = row;
    account.into_account(account_type.map(|t| t.description))
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_id(&self, id: i32) -> FaultResult<Option<Account>> {
        let query = Accounts::find_by_id(id)
            .find_also_related(AccountTypes)
            .one(self.db.get_connection());
        let row = self.db.run("find_account", query).await?;
        Ok(row.map(with_type))
    }

    async fn find_by_code(&self, code: i64) -> FaultResult<Option<Account>> {
        let query = Accounts::find()
            .filter(AccountColumn::Code.eq(code))
            .one(self.db.get_connection());
        let account = self.db.run("find_account_by_code", query).await?;
        Ok(account.map(|model| model.into_account(None)))
    }

    async fn find_page(&self, spec: &QuerySpec) -> FaultResult<Page<Account>> {
        let builder = AccountQueryBuilder::new(spec);
        let condition = builder.condition();

        let count = Accounts::find()
            .filter(condition.clone())
            .count(self.db.get_connection());
        let total_count = self.db.run("count_accounts", count).await?;

        let page = builder
            .apply_order(Accounts::find().filter(condition).find_also_related(AccountTypes))
            .limit(spec.limit() as u64)
            .offset(spec.skip())
            .all(self.db.get_connection());
        let rows = self.db.run("find_accounts_page", page).await?;

        debug!(
            total_count,
            returned = rows.len(),
            limit = spec.limit(),
            offset = spec.offset(),
            "Loaded account page"
        );

        Ok(Page::from_spec(rows.into_iter().map(with_type).collect(), total_count, spec))
    }

    async fn create(&self, account: Account) -> FaultResult<Account> {
        let insert = AccountActiveModel::from(&account).insert(self.db.get_connection());
        let model = self.db.run("create_account", insert).await?;
        Ok(model.into_account(account.type_description))
    }

    async fn update(&self, account: Account) -> FaultResult<Account> {
        let update = AccountActiveModel::from(&account).update(self.db.get_connection());
        let model = self.db.run("update_account", update).await?;
        Ok(model.into_account(account.type_description))
    }

    async fn delete(&self, id: i32) -> FaultResult<bool> {
        let delete = Accounts::delete_by_id(id).exec(self.db.get_connection());
        let result = self.db.run("delete_account", delete).await?;
        Ok(result.rows_affected > 0)
    }

    async fn active_counts_by_type(&self) -> FaultResult<Vec<AccountsByTypeReportDto>> {
        let types = AccountTypes::find()
            .order_by_asc(AccountTypeColumn::Description)
            .all(self.db.get_connection());
        let types = self.db.run("find_account_types", types).await?;

        let counts = Accounts::find()
            .select_only()
            .column(AccountColumn::TypeId)
            .column_as(Expr::col((Accounts, AccountColumn::Id)).count(), "active_count")
            .filter(AccountColumn::Status.eq(AccountStatusColumn::Active))
            .group_by(AccountColumn::TypeId)
            .into_tuple::<(i32, i64)>()
            .all(self.db.get_connection());
        let counts: HashMap<i32, i64> = self
            .db
            .run("count_active_accounts_by_type", counts)
            .await?
            .into_iter()
            .collect();

        Ok(types
            .into_iter()
            .map(|account_type| AccountsByTypeReportDto {
                type_id: account_type.id,
                active_account_count: counts.get(&account_type.id).copied().unwrap_or(0).max(0) as u64,
                type_description: account_type.description,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seaorm::repositories::SeaOrmAccountTypeRepository;
    use crate::testing::{create_test_db, seed_accounts};
    use coreledger_core::{AccountField, AccountFilter, AccountStatus, AccountType, NormalBalance, SortDirection};
    use coreledger_interfaces::AccountTypeRepository;

    async fn setup() -> (SeaOrmAccountRepository, i32) {
        let db = create_test_db().await;
        let account_type = SeaOrmAccountTypeRepository::new(db.clone())
            .create(AccountType::create("Assets").unwrap())
            .await
            .unwrap();
        (SeaOrmAccountRepository::new(db), account_type.id)
    }

    #[tokio::test]
    async fn test_create_and_find_with_type_description() {
        let (repo, type_id) = setup().await;
        let account = Account::create(1000, "Cash", type_id, AccountStatus::Active, NormalBalance::Debit).unwrap();

        let created = repo.create(account).await.unwrap();
        let loaded = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(loaded.code, 1000);
        assert_eq!(loaded.type_description.as_deref(), Some("Assets"));

        let by_code = repo.find_by_code(1000).await.unwrap().unwrap();
        assert_eq!(by_code.id, created.id);
        assert!(repo.find_by_code(4242).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_account_type_violates_foreign_key() {
        let (repo, type_id) = setup().await;
        let account =
            Account::create(1000, "Orphan", type_id + 100, AccountStatus::Active, NormalBalance::Debit).unwrap();
        let err = repo.create(account).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_status_filter_counts_and_pages_share_predicate() {
        let db = create_test_db().await;
        seed_accounts(&db, 100).await;
        let repo = SeaOrmAccountRepository::new(db);

        let spec = QuerySpec::new(50, 0).with_filter(Some(AccountFilter::Status(AccountStatus::Active)));
        let page = repo.find_page(&spec).await.unwrap();
        assert_eq!(page.total_count, 90);
        assert_eq!(page.items.len(), 50);
        assert!(page.items.iter().all(|a| a.status == AccountStatus::Active));
    }

    #[tokio::test]
    async fn test_negative_offset_reads_from_start_and_is_echoed() {
        let db = create_test_db().await;
        seed_accounts(&db, 5).await;
        let repo = SeaOrmAccountRepository::new(db);

        let page = repo.find_page(&QuerySpec::new(2, -3)).await.unwrap();
        assert_eq!(page.offset, -3);
        assert_eq!(page.items.iter().map(|a| a.code).collect::<Vec<_>>(), vec![1000, 1001]);
    }

    #[tokio::test]
    async fn test_sort_by_code_desc() {
        let db = create_test_db().await;
        seed_accounts(&db, 12).await;
        let repo = SeaOrmAccountRepository::new(db);

        let spec = QuerySpec::new(3, 0).with_sort(Some(AccountField::Code), SortDirection::Desc);
        let page = repo.find_page(&spec).await.unwrap();
        assert_eq!(page.items.iter().map(|a| a.code).collect::<Vec<_>>(), vec![1011, 1010, 1009]);
        assert_eq!(page.items[0].type_description.as_deref(), Some("Assets"));
    }

    #[tokio::test]
    async fn test_name_filter_matches_substring_literally() {
        let (repo, type_id) = setup().await;
        for (code, name) in [(1, "Petty Cash"), (2, "Cash at Bank"), (3, "100% Reserve"), (4, "1000 Reserve")] {
            let account = Account::create(code, name, type_id, AccountStatus::Active, NormalBalance::Debit).unwrap();
            repo.create(account).await.unwrap();
        }

        let cash = QuerySpec::default().with_filter(Some(AccountFilter::NameContains("CASH".to_string())));
        assert_eq!(repo.find_page(&cash).await.unwrap().total_count, 2);

        let percent = QuerySpec::default().with_filter(Some(AccountFilter::NameContains("0%".to_string())));
        let page = repo.find_page(&percent).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "100% Reserve");
    }

    #[tokio::test]
    async fn test_active_counts_by_type() {
        let db = create_test_db().await;
        seed_accounts(&db, 20).await;
        SeaOrmAccountTypeRepository::new(db.clone())
            .create(AccountType::create("Archive").unwrap())
            .await
            .unwrap();
        let repo = SeaOrmAccountRepository::new(db);

        let report = repo.active_counts_by_type().await.unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].type_description, "Archive");
        assert_eq!(report[0].active_account_count, 0);
        assert_eq!(report[1].type_description, "Assets");
        assert_eq!(report[1].active_account_count, 18);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (repo, type_id) = setup().await;
        let created = repo
            .create(Account::create(2000, "Receivables", type_id, AccountStatus::Active, NormalBalance::Debit).unwrap())
            .await
            .unwrap();

        let mut account = repo.find_by_id(created.id).await.unwrap().unwrap();
        account.deactivate().unwrap();
        let updated = repo.update(account).await.unwrap();
        assert_eq!(updated.status, AccountStatus::Inactive);
        assert!(updated.deactivated_at.is_some());

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}

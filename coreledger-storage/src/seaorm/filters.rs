//! Whitelist-driven query building for account listings
//!
//! Only fields known to [`AccountField`] ever reach SQL, each through its
//! fixed column mapping. Filter values are always bound as parameters.

use coreledger_core::{AccountField, AccountFilter, QuerySpec};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, Order, QueryOrder};

use super::entities::{AccountColumn, AccountStatusColumn, Accounts, NormalBalanceColumn};

/// Escape character used for LIKE patterns
const LIKE_ESCAPE: char = '\\';

/// Builds the shared predicate and ordering for account queries
#[derive(Debug, Clone, Copy)]
pub struct AccountQueryBuilder<'a> {
    spec: &'a QuerySpec,
}

impl<'a> AccountQueryBuilder<'a> {
    pub fn new(spec: &'a QuerySpec) -> Self {
        Self { spec }
    }

    /// Column backing a whitelisted field
    pub fn column(field: AccountField) -> AccountColumn {
        match field {
            AccountField::Code => AccountColumn::Code,
            AccountField::Name => AccountColumn::Name,
            AccountField::TypeId => AccountColumn::TypeId,
            AccountField::Status => AccountColumn::Status,
            AccountField::NormalBalance => AccountColumn::NormalBalance,
            AccountField::CreatedAt => AccountColumn::CreatedAt,
            AccountField::UpdatedAt => AccountColumn::UpdatedAt,
        }
    }

    /// Predicate applied to both the count and the page
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(filter) = self.spec.filter() {
            condition = condition.add(Self::filter_condition(filter));
        }
        condition
    }

    fn filter_condition(filter: &AccountFilter) -> Condition {
        let column = Self::column(filter.field());
        let expr = match filter {
            AccountFilter::Code(code) => column.eq(*code),
            AccountFilter::TypeId(type_id) => column.eq(*type_id),
            AccountFilter::Status(status) => column.eq(AccountStatusColumn::from(*status)),
            AccountFilter::NormalBalance(normal_balance) => {
                column.eq(NormalBalanceColumn::from(*normal_balance))
            }
            AccountFilter::NameContains(fragment) => {
                let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));
                Expr::expr(Func::lower(Expr::col((Accounts, column))))
                    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
            }
        };
        Condition::all().add(expr)
    }

    /// Apply the requested sort, then `id asc` as a stable tiebreaker
    pub fn apply_order<Q: QueryOrder>(&self, query: Q) -> Q {
        let query = match self.spec.sort_field() {
            Some(field) => {
                let order = if self.spec.sort_direction().is_desc() {
                    Order::Desc
                } else {
                    Order::Asc
                };
                query.order_by(Self::column(field), order)
            }
            None => query,
        };
        query.order_by_asc(AccountColumn::Id)
    }
}

/// Escape LIKE metacharacters so user input only ever matches literally
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

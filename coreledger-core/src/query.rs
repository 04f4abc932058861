//! Request-derived query specification for account listings
//!
//! Raw query-string values are untrusted. Everything here degrades to a safe
//! default instead of failing: an unparsable limit becomes the default limit,
//! an unknown sort field falls back to identifier order and a malformed filter
//! is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{AccountStatus, NormalBalance};

/// Hard upper bound on page size
pub const MAX_LIMIT: i64 = 100;

/// Page size used when none (or garbage) is supplied
pub const DEFAULT_LIMIT: i64 = 100;

/// Sort order requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse case-insensitively, falling back to ascending
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn is_desc(self) -> bool {
        self == SortDirection::Desc
    }
}

/// Whitelisted account fields usable for sorting and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountField {
    Code,
    Name,
    TypeId,
    Status,
    NormalBalance,
    CreatedAt,
    UpdatedAt,
}

impl AccountField {
    pub const ALL: [AccountField; 7] = [
        AccountField::Code,
        AccountField::Name,
        AccountField::TypeId,
        AccountField::Status,
        AccountField::NormalBalance,
        AccountField::CreatedAt,
        AccountField::UpdatedAt,
    ];

    /// Wire name of the field
    pub fn as_str(self) -> &'static str {
        match self {
            AccountField::Code => "code",
            AccountField::Name => "name",
            AccountField::TypeId => "typeId",
            AccountField::Status => "status",
            AccountField::NormalBalance => "normalBalance",
            AccountField::CreatedAt => "createdAt",
            AccountField::UpdatedAt => "updatedAt",
        }
    }

    /// Match a raw name against the whitelist, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed filter over the account collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// Exact code match
    Code(i64),
    /// Case-insensitive substring of the name
    NameContains(String),
    /// Exact account type match
    TypeId(i32),
    Status(AccountStatus),
    NormalBalance(NormalBalance),
}

impl AccountFilter {
    /// Parse a `field=value` expression
    ///
    /// Returns `None` when the shape is wrong, the field is not filterable or
    /// the value does not coerce to the field's type.
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, value) = raw.split_once('=')?;
        let field = AccountField::parse(field)?;
        Self::coerce(field, value.trim())
    }

    fn coerce(field: AccountField, value: &str) -> Option<Self> {
        match field {
            AccountField::Code => value.parse().ok().map(AccountFilter::Code),
            AccountField::Name if !value.is_empty() => Some(AccountFilter::NameContains(value.to_string())),
            AccountField::TypeId => value.parse().ok().map(AccountFilter::TypeId),
            AccountField::Status => value.parse().ok().map(AccountFilter::Status),
            AccountField::NormalBalance => value.parse().ok().map(AccountFilter::NormalBalance),
            AccountField::Name | AccountField::CreatedAt | AccountField::UpdatedAt => None,
        }
    }

    pub fn field(&self) -> AccountField {
        match self {
            AccountFilter::Code(_) => AccountField::Code,
            AccountFilter::NameContains(_) => AccountField::Name,
            AccountFilter::TypeId(_) => AccountField::TypeId,
            AccountFilter::Status(_) => AccountField::Status,
            AccountFilter::NormalBalance(_) => AccountField::NormalBalance,
        }
    }
}

/// Raw listing parameters exactly as they arrive on the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub filter: Option<String>,
}

/// Build from decoded query-string pairs; the first occurrence of a key wins
///
/// Unknown keys are ignored, so one odd parameter never hides the others.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawListQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut raw = RawListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut raw.limit,
                "offset" => &mut raw.offset,
                "sortBy" => &mut raw.sort_by,
                "sortDirection" => &mut raw.sort_direction,
                "filter" => &mut raw.filter,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

/// Validated paging, sorting and filtering for one listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    limit: i64,
    offset: i64,
    sort_field: Option<AccountField>,
    sort_direction: SortDirection,
    filter: Option<AccountFilter>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}

impl QuerySpec {
    /// Create a spec, clamping the limit into `1..=MAX_LIMIT`
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset,
            sort_field: None,
            sort_direction: SortDirection::Asc,
            filter: None,
        }
    }

    pub fn with_sort(mut self, field: Option<AccountField>, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn with_filter(mut self, filter: Option<AccountFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Offset as requested, possibly negative
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Number of rows storage should skip
    pub fn skip(&self) -> u64 {
        self.offset.max(0) as u64
    }

    pub fn sort_field(&self) -> Option<AccountField> {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter(&self) -> Option<&AccountFilter> {
        self.filter.as_ref()
    }
}

impl From<&RawListQuery> for QuerySpec {
    fn from(raw: &RawListQuery) -> Self {
        let limit = parse_int(raw.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        let offset = parse_int(raw.offset.as_deref()).unwrap_or(0);
        let sort_field = raw.sort_by.as_deref().and_then(AccountField::parse);
        let sort_direction = raw
            .sort_direction
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default();

        let filter = raw.filter.as_deref().and_then(|expr| {
            let parsed = AccountFilter::parse(expr);
            if parsed.is_none() {
                tracing::debug!(filter = %expr, "Ignoring unusable account filter");
            }
            parsed
        });

        QuerySpec::new(limit, offset)
            .with_sort(sort_field, sort_direction)
            .with_filter(filter)
    }
}

impl From<RawListQuery> for QuerySpec {
    fn from(raw: RawListQuery) -> Self {
        QuerySpec::from(&raw)
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

//! Paged listing responses

use coreledger_core::QuerySpec;
use serde::{Deserialize, Serialize};

/// One page of a filtered, sorted collection
///
/// `total_count` is the number of matching rows before paging is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> Page<T> {
    /// Build a page echoing the effective limit and offset of `spec`
    pub fn from_spec(items: Vec<T>, total_count: u64, spec: &QuerySpec) -> Self {
        Self {
            items,
            total_count,
            limit: spec.limit(),
            offset: spec.offset(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

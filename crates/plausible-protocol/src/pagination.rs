//! Cursor pagination for the sites listing

use serde::{Deserialize, Serialize};

use crate::QueryArgs;

/// Pagination options for a listing request.
///
/// `after` and `before` are opaque cursors taken from a previous page's
/// [`PaginationMeta`]; they are passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub after: Option<String>,
    pub before: Option<String>,
    pub limit: Option<u32>,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Order: after, before, limit. Unset options are left out.
    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();

        if let Some(after) = self.after.as_deref().filter(|a| !a.is_empty()) {
            args.add("after", after);
        }
        if let Some(before) = self.before.as_deref().filter(|b| !b.is_empty()) {
            args.add("before", before);
        }
        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            args.add("limit", limit.to_string());
        }

        args
    }
}

/// Pagination information returned with a page of results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationMeta {
    /// Cursor to fetch the page after this one
    pub after: Option<String>,
    /// Cursor to fetch the page before this one
    pub before: Option<String>,
    pub limit: u32,
}

impl PaginationMeta {
    /// Paginator for the following page, if there is one
    pub fn next_page(&self) -> Option<Paginator> {
        self.after.as_ref().map(|cursor| Paginator {
            after: Some(cursor.clone()),
            before: None,
            limit: Some(self.limit),
        })
    }
}

//! Filter, sort and paging descriptors for the `*Find` endpoints.
//!
//! ```rust
//! use hostingde_provider::{Filter, FilterOrChain, FindQuery, Sort};
//!
//! let query = FindQuery::new()
//!     .filter(FilterOrChain::any_of(vec![
//!         Filter::new("ZoneName", "example.com"),
//!         Filter::new("ZoneName", "example.org"),
//!     ]))
//!     .sort(Sort::ascending("zoneName"))
//!     .limit(25);
//! assert_eq!(query.page, 1);
//! ```

use serde::{Deserialize, Serialize};

/// Default page size when none is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Comparison between a filter's field and value. Omitted means equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    Equal,
    Unequal,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

/// A single field condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl Filter {
    /// Field equals value (relation left implicit).
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            value: Some(value.into()),
            relation: None,
        }
    }

    #[must_use]
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }
}

/// How the sub-filters of a chain are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
}

/// Top-level filter object: either a single condition or a chain of
/// sub-filters joined by a [`Connective`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOrChain {
    #[serde(flatten)]
    pub filter: Filter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_filter_connective: Option<Connective>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_filter: Vec<Filter>,
}

impl FilterOrChain {
    /// Match records satisfying any of `filters`.
    pub fn any_of(filters: Vec<Filter>) -> Self {
        Self::chain(Connective::Or, filters)
    }

    /// Match records satisfying all of `filters`.
    pub fn all_of(filters: Vec<Filter>) -> Self {
        Self::chain(Connective::And, filters)
    }

    fn chain(connective: Connective, filters: Vec<Filter>) -> Self {
        Self {
            filter: Filter::default(),
            sub_filter_connective: Some(connective),
            sub_filter: filters,
        }
    }
}

impl From<Filter> for FilterOrChain {
    fn from(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Everything a `*Find` request needs besides credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub filter: Option<FilterOrChain>,
    pub limit: u32,
    /// 1-indexed.
    pub page: u32,
    pub sort: Option<Sort>,
}

impl Default for FindQuery {
    fn default() -> Self {
        Self {
            filter: None,
            limit: DEFAULT_LIMIT,
            page: 1,
            sort: None,
        }
    }
}

impl FindQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<FilterOrChain>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

//! List Queries
//!
//! Sort and pagination parameters in json-server's query dialect, and the
//! paginated envelope it answers with.

use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::models::Wish;

/// Field the collaborator sorts by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// `_sort` value: descending is a leading minus (`-price`).
    pub fn to_param(&self) -> String {
        match self.order {
            SortOrder::Asc => self.field.as_str().to_string(),
            SortOrder::Desc => format!("-{}", self.field.as_str()),
        }
    }
}

/// One page request against the wishes collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortSpec>,
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    /// Query pairs in the order the collaborator logs them
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(sort) = self.sort {
            pairs.push(("_sort", sort.to_param()));
        }
        pairs.push(("_page", self.page.to_string()));
        pairs.push(("_per_page", self.per_page.to_string()));
        pairs
    }
}

/// json-server v1 pagination envelope.
///
/// Only `data` and `next` are consumed; `first`, `prev`, `last`, `pages` and
/// `items` are ignored.
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    data: Vec<Wish>,
    #[serde(default)]
    next: Option<serde_json::Value>,
}

/// A fetched page of wishes
#[derive(Debug, Clone, PartialEq)]
pub struct WishPage {
    pub items: Vec<Wish>,
    pub has_more: bool,
}

impl WishPage {
    /// Decode a list response body. A bare array is rejected.
    pub fn from_json(body: &str) -> StoreResult<Self> {
        let envelope: PageEnvelope = serde_json::from_str(body).map_err(|e| {
            StoreError::Decode(format!("expected paginated envelope: {}", e))
        })?;
        let has_more = envelope.next.map_or(false, |next| !next.is_null());
        Ok(Self {
            items: envelope.data,
            has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WISH: &str = r#"{"id":"1","title":"Camera","description":"","imageUrl":"","priority":"high","price":199.99,"completed":false,"createdAt":"2024-05-01T10:00:00.000Z"}"#;

    #[test]
    fn test_sort_param() {
        let desc = SortSpec::new(SortField::Price, SortOrder::Desc);
        let asc = SortSpec::new(SortField::CreatedAt, SortOrder::Asc);
        assert_eq!(desc.to_param(), "-price");
        assert_eq!(asc.to_param(), "createdAt");
    }

    #[test]
    fn test_query_pairs_without_sort() {
        let query = ListQuery { sort: None, page: 2, per_page: 10 };
        assert_eq!(
            query.to_pairs(),
            vec![("_page", "2".to_string()), ("_per_page", "10".to_string())]
        );
    }

    #[test]
    fn test_envelope_with_next_page() {
        let body = format!(
            r#"{{"first":1,"prev":null,"next":2,"last":3,"pages":3,"items":21,"data":[{}]}}"#,
            WISH
        );
        let page = WishPage::from_json(&body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Camera");
        assert!(page.has_more);
    }

    #[test]
    fn test_envelope_last_page() {
        let null_next = format!(r#"{{"next":null,"data":[{}]}}"#, WISH);
        let missing_next = r#"{"data":[]}"#;
        assert!(!WishPage::from_json(&null_next).unwrap().has_more);
        assert!(!WishPage::from_json(missing_next).unwrap().has_more);
    }

    #[test]
    fn test_bare_array_is_rejected() {
        let body = format!("[{}]", WISH);
        let err = WishPage::from_json(&body).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}

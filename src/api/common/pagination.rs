//
//  opsmngr-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Ops Manager API Responses
//!
//! Every Ops Manager list endpoint answers with the same envelope:
//!
//! ```json
//! {
//!   "links": [{"rel": "self", "href": "https://.../groups?pageNum=1&itemsPerPage=100"}],
//!   "results": [],
//!   "totalCount": 0
//! }
//! ```
//!
//! Pages are requested with the `pageNum` and `itemsPerPage` query parameters
//! carried by [`ListOptions`]. The client never fetches follow-up pages on
//! its own; use [`PaginatedResponse::next_url`] or
//! [`Response::current_page`](crate::api::Response::current_page) to drive
//! iteration.
//!
//! # Example
//!
//! ```rust
//! use opsmngr::api::common::PaginatedResponse;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! struct Host {
//!     hostname: String,
//! }
//!
//! let json = r#"{
//!     "links": [{"rel": "next", "href": "https://cloud.mongodb.com/api/public/v1.0/groups/1/hosts?pageNum=2"}],
//!     "results": [{"hostname": "db1.example.com"}],
//!     "totalCount": 120
//! }"#;
//!
//! let page: PaginatedResponse<Host> = serde_json::from_str(json).unwrap();
//! assert!(page.has_next());
//! assert_eq!(page.total_count, 120);
//! ```

use serde::{Deserialize, Serialize};

use super::{find_link, Link};

/// Pagination query parameters shared by list endpoints.
///
/// Embed it in endpoint-specific options with `#[serde(flatten)]`; unset
/// fields are left out of the query string.
///
/// | Field | Query parameter |
/// |-------|-----------------|
/// | `page_num` | `pageNum` |
/// | `items_per_page` | `itemsPerPage` |
/// | `include_count` | `includeCount` |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Page to return, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,

    /// Number of items per page (server default is 100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,

    /// Whether the server should compute `totalCount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_count: Option<bool>,
}

impl ListOptions {
    pub fn page(page_num: u32, items_per_page: u32) -> Self {
        Self {
            page_num: Some(page_num),
            items_per_page: Some(items_per_page),
            include_count: None,
        }
    }
}

/// One page of results from an Ops Manager list endpoint.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in `results`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Pagination relations (`self`, `next`, `previous`).
    #[serde(default)]
    pub links: Vec<Link>,

    /// Items in the current page. May be empty.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    /// Total number of items across all pages.
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            results: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// Checks if a `next` relation is present.
    pub fn has_next(&self) -> bool {
        find_link(&self.links, "next").is_some()
    }

    /// Returns the href of the `next` relation, if any.
    pub fn next_url(&self) -> Option<&str> {
        find_link(&self.links, "next").map(|link| link.href.as_str())
    }

    /// Returns the href of the `previous` relation, if any.
    pub fn previous_url(&self) -> Option<&str> {
        find_link(&self.links, "previous").map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_envelope_defaults() {
        let page: PaginatedResponse<String> = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert!(page.links.is_empty());
        assert_eq!(page.total_count, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_next_and_previous() {
        let json = r#"{
            "links": [
                {"rel": "previous", "href": "https://x/groups?pageNum=1"},
                {"rel": "self", "href": "https://x/groups?pageNum=2"},
                {"rel": "next", "href": "https://x/groups?pageNum=3"}
            ],
            "results": ["a", "b"],
            "totalCount": 5
        }"#;
        let page: PaginatedResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_url(), Some("https://x/groups?pageNum=3"));
        assert_eq!(page.previous_url(), Some("https://x/groups?pageNum=1"));
        assert_eq!(page.results, vec!["a", "b"]);
    }

    #[test]
    fn test_list_options_serialization_skips_unset() {
        let options = ListOptions {
            page_num: Some(2),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, serde_json::json!({"pageNum": 2}));
    }
}

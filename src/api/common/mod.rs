//
//  opsmngr-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Ops Manager Public API
//!
//! This module provides the types shared by every resource service: the
//! error taxonomy, the server's error envelope, HATEOAS links and the
//! pagination types (re-exported from [`pagination`]).
//!
//! # Example
//!
//! ```rust
//! use opsmngr::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::InvalidArgument { arg, .. }) => println!("Fix argument {}", arg),
//!         Err(ApiError::Api(err)) if err.is_not_found() => println!("Not found"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Argument errors are raised before any request is built
//! - Decode errors only occur for malformed JSON; empty bodies are accepted

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::context::ContextError;
use super::transport::{RawResponse, TransportError};

mod pagination;

pub use pagination::*;

/// Unified error type for all Ops Manager API operations.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `InvalidArgument` | A required identifier or body is missing |
/// | `InvalidUrl` | A path or link cannot be parsed as a URL |
/// | `Encode` | The request body cannot be serialized |
/// | `Query` | Options cannot be expressed as query parameters |
/// | `Transport` | The HTTP transport failed |
/// | `Context` | The call was canceled or hit its deadline |
/// | `Api` | The server answered with a non-2xx status |
/// | `Decode` | A 2xx body is not valid JSON for the target type |
/// | `Io` | Streaming a body into a writer failed |
/// | `MissingSelfLink` / `InvalidPage` | The current page cannot be derived |
/// | `Config` | Client configuration is invalid |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was empty or missing.
    #[error("{arg} is invalid because {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A relative path, base URL or link could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be deserialized into the target type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The options value cannot be encoded as query parameters.
    #[error("invalid query options: {0}")]
    Query(String),

    /// The underlying HTTP transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The call was canceled or its deadline passed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The server returned a non-2xx status.
    #[error(transparent)]
    Api(Box<ErrorResponse>),

    /// Copying a response body into the caller's writer failed.
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),

    /// The response carries no `self` link.
    #[error("no self link found")]
    MissingSelfLink,

    /// The `self` link carries no usable `pageNum` parameter.
    #[error("invalid page number: {0}")]
    InvalidPage(String),

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the server error envelope when this is an [`ApiError::Api`].
    pub fn as_error_response(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the call failed because its context was done.
    pub fn is_context(&self) -> bool {
        matches!(self, ApiError::Context(_))
    }
}

impl From<ErrorResponse> for ApiError {
    fn from(err: ErrorResponse) -> Self {
        ApiError::Api(Box::new(err))
    }
}

/// Error envelope returned by Ops Manager for non-2xx responses.
///
/// ```json
/// {
///   "detail": "No group with ID 5e66185d917b220fbd8bb4d1 exists.",
///   "error": 404,
///   "errorCode": "GROUP_NOT_FOUND",
///   "parameters": ["5e66185d917b220fbd8bb4d1"],
///   "reason": "Not Found"
/// }
/// ```
///
/// The request method, URL, status and headers are attached after decoding
/// so callers can inspect them on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human readable description of the failure.
    #[serde(default)]
    pub detail: String,

    /// HTTP status code as reported inside the body.
    #[serde(default, rename = "error")]
    pub http_code: u16,

    /// Machine readable error code, e.g. `GROUP_NOT_FOUND`.
    #[serde(default)]
    pub error_code: String,

    /// Values substituted into `detail`.
    #[serde(default)]
    pub parameters: Vec<serde_json::Value>,

    /// Reason phrase, e.g. `Not Found`.
    #[serde(default)]
    pub reason: String,

    #[serde(skip)]
    pub method: Method,

    #[serde(skip)]
    pub url: Option<Url>,

    #[serde(skip)]
    pub status: StatusCode,

    #[serde(skip)]
    pub headers: HeaderMap,
}

impl ErrorResponse {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Returns `true` if the server reported the given `errorCode`.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.error_code == code
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = self.url.as_ref().map(Url::as_str).unwrap_or_default();
        write!(
            f,
            "{} {}: {} (request {:?}) {}",
            self.method,
            url,
            self.status.as_u16(),
            self.error_code,
            self.detail
        )
    }
}

impl std::error::Error for ErrorResponse {}

/// Builds an [`ApiError::Api`] from a non-2xx response.
///
/// The Ops Manager envelope is tried first. A body carrying only a
/// `{"message": ...}` field, or no JSON at all, ends up in `detail` so the
/// caller still sees what the server said.
pub(crate) fn error_from_response(method: &Method, raw: &RawResponse) -> ApiError {
    let mut err = match serde_json::from_slice::<ErrorResponse>(&raw.body) {
        Ok(envelope) if !envelope.detail.is_empty() || !envelope.error_code.is_empty() => envelope,
        _ => ErrorResponse {
            detail: fallback_detail(&raw.body),
            http_code: raw.status.as_u16(),
            reason: raw
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            ..Default::default()
        },
    };

    err.method = method.clone();
    err.url = Some(raw.url.clone());
    err.status = raw.status;
    err.headers = raw.headers.clone();
    ApiError::from(err)
}

fn fallback_detail(body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}

/// HATEOAS-style link returned by nearly every Ops Manager resource.
///
/// List endpoints carry `self`, `next` and `previous` relations whose hrefs
/// include `pageNum` and `itemsPerPage` query parameters.
///
/// ```rust
/// use opsmngr::api::common::Link;
///
/// let link: Link = serde_json::from_str(
///     r#"{"rel": "self", "href": "https://cloud.mongodb.com/api/public/v1.0/groups?pageNum=1"}"#,
/// ).unwrap();
/// assert_eq!(link.rel, "self");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation of the linked resource to the current one.
    pub rel: String,

    /// Absolute URL of the linked resource.
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Finds the first link with the given relation.
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.rel == rel)
}

/// Rejects an empty identifier before any request is built.
pub(crate) fn require(arg: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::InvalidArgument {
            arg,
            reason: "it cannot be empty",
        });
    }
    Ok(())
}

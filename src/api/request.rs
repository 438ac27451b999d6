//
//  opsmngr-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Outbound request values.
//!
//! A [`Request`] is plain data: method, absolute URL, headers and an optional
//! JSON payload. Building one performs no I/O; the
//! [`HttpTransport`](super::HttpTransport) executes it later.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::common::ApiError;

/// Media type the client asks the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// `application/json`, used by almost every endpoint
    Json,
    /// `application/gzip`, used by diagnostics and log downloads
    Gzip,
    /// `text/plain`, used by the version probe
    PlainText,
}

impl Accept {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accept::Json => "application/json",
            Accept::Gzip => "application/gzip",
            Accept::PlainText => "text/plain",
        }
    }
}

/// An HTTP request ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub(crate) fn new(method: Method, url: Url, accept: Accept, user_agent: Option<&HeaderValue>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept.as_str()));
        if let Some(user_agent) = user_agent {
            headers.insert(USER_AGENT, user_agent.clone());
        }
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    /// Encodes `body` as JSON and sets `Content-Type: application/json`.
    ///
    /// `serde_json` writes `<`, `>` and `&` literally, so query operators and
    /// expressions reach the server untouched.
    pub(crate) fn with_json_body<B>(mut self, body: &B) -> Result<Self, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(payload);
        Ok(self)
    }

    /// Returns a header value as a string slice, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the body as UTF-8 text, if any.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Filter {
        query: &'static str,
    }

    fn url() -> Url {
        Url::parse("https://cloud.mongodb.com/api/public/v1.0/groups").unwrap()
    }

    #[test]
    fn test_json_body_is_not_html_escaped() {
        let request = Request::new(Method::POST, url(), Accept::Json, None)
            .with_json_body(&Filter {
                query: r#"{"$gt": 1} <a> & <b>"#,
            })
            .unwrap();

        let body = request.body_text().unwrap();
        assert!(body.contains("<a> & <b>"));
        assert!(body.contains("$gt"));
        assert!(!body.contains("\\u003c"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_no_body_no_content_type() {
        let ua = HeaderValue::from_static("opsmngr-client/test");
        let request = Request::new(Method::GET, url(), Accept::Gzip, Some(&ua));
        assert!(request.body.is_none());
        assert!(request.header("content-type").is_none());
        assert_eq!(request.header("accept"), Some("application/gzip"));
        assert_eq!(request.header("user-agent"), Some("opsmngr-client/test"));
    }
}

//
//  opsmngr-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The client never talks to the network itself. It hands each [`Request`]
//! to an [`HttpTransport`], which returns the status, headers and the fully
//! read body. The transport owns authentication: Ops Manager expects HTTP
//! digest auth, so production code passes in a `reqwest::Client` (or a
//! custom transport) that already knows how to answer the challenge.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::trace;
use url::Url;

use super::request::Request;

/// Errors raised below the HTTP layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Represents Reqwest crate error.
    #[error("HTTP transport error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("HTTP transport error: {0}")]
    Other(String),
}

/// A response as received from the wire, body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Final URL after redirects.
    pub url: Url,
    pub body: Vec<u8>,
}

/// Executes a built request.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportError>;
}

/// An implementation of the `HttpTransport` trait using the reqwest library.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. one wrapping digest authentication.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Builds a client with an overall request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?.to_vec();
        trace!(%status, bytes = body.len(), "response body read");

        Ok(RawResponse {
            status,
            headers,
            url,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod test {
    use mockall::mock;

    use super::*;

    /////////////////////////////////////////////
    // Test helpers & mocks
    /////////////////////////////////////////////

    mock! {
        pub(crate) Transport {}

        #[async_trait]
        impl HttpTransport for Transport {
            async fn execute(&self, request: Request) -> Result<RawResponse, TransportError>;
        }
    }

    impl MockTransport {
        /// Expects exactly one call and answers it with `status` and `body`.
        pub(crate) fn should_respond(&mut self, status: u16, body: &str) {
            let body = body.as_bytes().to_vec();
            self.expect_execute().once().return_once(move |request| {
                Ok(raw_response(request.url, status, body))
            });
        }

        pub(crate) fn should_not_be_called(&mut self) {
            self.expect_execute().never();
        }
    }

    pub(crate) fn raw_response(url: Url, status: u16, body: Vec<u8>) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            url,
            body,
        }
    }
}

//
//  opsmngr-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the request/response pipeline for the MongoDB Ops
//! Manager Public API and the resource services built on top of it.
//!
//! ## Architecture
//!
//! - [`client`]: The shared [`Client`], its builder, and the [`RequestDoer`] contract
//! - [`request`]: Outbound request values and `Accept` negotiation
//! - [`transport`]: The [`HttpTransport`] seam and its reqwest implementation
//! - [`context`]: Cancellation and deadlines for in-flight calls
//! - [`response`]: The [`Response`] wrapper with pagination helpers
//! - [`query`]: Merging typed options into query strings
//! - [`common`]: Errors, links and pagination types shared by every resource
//! - [`opsmngr`]: One service per Ops Manager resource family
//!
//! ## Usage
//!
//! ```rust,no_run
//! use opsmngr::api::{Client, Context, ListOptions, OpsManager};
//!
//! # async fn example() -> Result<(), opsmngr::api::ApiError> {
//! let ops = OpsManager::new(Client::builder().build()?);
//! let ctx = Context::background();
//!
//! let options = ListOptions { page_num: Some(2), items_per_page: Some(50), ..Default::default() };
//! let (projects, response) = ops.projects().list(&ctx, Some(&options)).await?;
//! println!("page {} holds {} projects", response.current_page()?, projects.results.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is returned as an [`ApiError`]; nothing is retried or
//! swallowed. Non-2xx responses become [`ApiError::Api`] carrying the decoded
//! Ops Manager error envelope.

pub mod client;
pub mod common;
pub mod context;
pub mod opsmngr;
pub mod query;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Client, ClientBuilder, RequestDoer, Sink};
pub use common::{ApiError, ErrorResponse, Link, ListOptions, PaginatedResponse};
pub use context::{Context, ContextError};
pub use opsmngr::OpsManager;
pub use query::set_query_params;
pub use request::{Accept, Request};
pub use response::Response;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, TransportError};

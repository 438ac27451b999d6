//
//  opsmngr-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # MongoDB Ops Manager API Client Library
//!
//! Typed bindings for the MongoDB Ops Manager Public API. Every resource
//! method formats a path, builds a request through the shared [`api::Client`],
//! executes it through an injected transport, and decodes the JSON response
//! into a typed value.
//!
//! ## Module Structure
//!
//! - [`api`]: Request/response pipeline, shared types and resource services
//! - [`config`]: Configuration file management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use opsmngr::api::{Client, Context, OpsManager};
//!
//! # async fn example() -> Result<(), opsmngr::api::ApiError> {
//! let client = Client::builder()
//!     .base_url("https://opsmanager.example.com:8080/")
//!     .build()?;
//! let ops = OpsManager::new(client);
//!
//! let ctx = Context::background();
//! let (project, _response) = ops.projects().get(&ctx, "5e66185d917b220fbd8bb4d1").await?;
//! println!("{}", project.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Ops Manager expects HTTP digest authentication with programmatic API keys.
//! This crate does not implement it: supply an authenticating
//! [`reqwest::Client`] through [`api::ReqwestTransport::with_client`] or your
//! own [`api::HttpTransport`].

/// Request/response pipeline and resource services.
///
/// Contains the shared [`api::Client`], the transport abstraction, pagination
/// helpers, and one service per Ops Manager resource family.
pub mod api;

/// Configuration file management.
///
/// Loads client settings from a TOML file stored in the platform-specific
/// configuration directory and turns them into a [`api::ClientBuilder`].
pub mod config;

pub use api::{ApiError, Client, ClientBuilder, Context, OpsManager, Response};
pub use config::Config;

/// Application name used for configuration directories.
pub const APP_NAME: &str = "opsmngr";

/// Library version, derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use opsmngr::VERSION;
///
/// println!("opsmngr-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Ops Manager endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/";

/// Returns the default `User-Agent` header value sent with every request.
///
/// # Example
///
/// ```rust
/// assert!(opsmngr::default_user_agent().starts_with("opsmngr-client/"));
/// ```
pub fn default_user_agent() -> String {
    format!("opsmngr-client/{}", VERSION)
}

//
//  opsmngr-client
//  api/opsmngr/service_version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server version probe.
//!
//! The endpoint answers in plain text, e.g.
//! `gitHash=f2a4c2c6b6df8ea3d5a4d6aa0b3d3f8c; versionString=4.4.0.100`.

use std::sync::Arc;

use reqwest::Method;

use crate::api::client::{Client, RequestDoer};
use crate::api::common::ApiError;
use crate::api::context::Context;
use crate::api::response::Response;

const VERSION_PATH: &str = "api/private/unauth/version";

/// Parsed version of the Ops Manager server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceVersion {
    pub git_hash: String,
    pub version: String,
}

impl ServiceVersion {
    /// Parses the `key=value; key=value` body. Unknown keys are ignored.
    pub fn parse(body: &str) -> Self {
        let mut version = ServiceVersion::default();
        for pair in body.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key.trim() {
                "gitHash" => version.git_hash = value.trim().to_string(),
                "versionString" => version.version = value.trim().to_string(),
                _ => {}
            }
        }
        version
    }
}

pub struct ServiceVersionService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> ServiceVersionService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn get(&self, ctx: &Context) -> Result<(ServiceVersion, Response), ApiError> {
        let request = self.client.new_plain_request(Method::GET, VERSION_PATH)?;
        let mut body = Vec::new();
        let response = self.client.send_to_writer(ctx, request, &mut body).await?;
        let version = ServiceVersion::parse(&String::from_utf8_lossy(&body));
        Ok((version, response))
    }
}

//
//  opsmngr-client
//  api/opsmngr/api_keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Programmatic API keys owned by an organization.
//!
//! The private key is only returned by [`ApiKeysService::create`]; later
//! reads show it masked.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// A programmatic API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub roles: Vec<ApiKeyRole>,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default)]
    pub role_name: String,
}

pub type ApiKeys = PaginatedResponse<ApiKey>;

/// Body for [`ApiKeysService::create`] and [`ApiKeysService::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiKeyInput {
    pub desc: String,
    pub roles: Vec<String>,
}

pub struct ApiKeysService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> ApiKeysService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        ctx: &Context,
        org_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(ApiKeys, Response), ApiError> {
        require("orgID", org_id)?;
        let path = set_query_params(&base_path(org_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (keys, mut response) = self.client.send_json::<ApiKeys>(ctx, request).await?;
        response.links = keys.links.clone();
        Ok((keys, response))
    }

    pub async fn get(&self, ctx: &Context, org_id: &str, key_id: &str) -> Result<(ApiKey, Response), ApiError> {
        require("orgID", org_id)?;
        require("apiKeyID", key_id)?;
        let path = format!("{}/{}", base_path(org_id), key_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create(&self, ctx: &Context, org_id: &str, input: &ApiKeyInput) -> Result<(ApiKey, Response), ApiError> {
        require("orgID", org_id)?;
        let request = self.client.new_request(Method::POST, &base_path(org_id), Some(input))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn update(
        &self,
        ctx: &Context,
        org_id: &str,
        key_id: &str,
        input: &ApiKeyInput,
    ) -> Result<(ApiKey, Response), ApiError> {
        require("orgID", org_id)?;
        require("apiKeyID", key_id)?;
        let path = format!("{}/{}", base_path(org_id), key_id);
        let request = self.client.new_request(Method::PATCH, &path, Some(input))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, org_id: &str, key_id: &str) -> Result<Response, ApiError> {
        require("orgID", org_id)?;
        require("apiKeyID", key_id)?;
        let path = format!("{}/{}", base_path(org_id), key_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }
}

fn base_path(org_id: &str) -> String {
    format!("{}/orgs/{}/apiKeys", PUBLIC_BASE_PATH, org_id)
}

//
//  opsmngr-client
//  api/opsmngr/agents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// Links to the per-type agent listings of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentLinks {
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A running agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub conf_count: i64,
    #[serde(default)]
    pub last_conf: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

pub type Agents = PaginatedResponse<Agent>;

/// An agent API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentApiKey {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub created_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_ip_addr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Body for [`AgentsService::create_api_key`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentApiKeysRequest {
    pub desc: String,
}

/// Agent version information for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentVersions {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub entries: Vec<AgentVersion>,
    #[serde(default)]
    pub is_any_agent_deprecated: bool,
    #[serde(default)]
    pub is_any_agent_version_deprecated: bool,
    #[serde(default)]
    pub is_any_agent_not_managed: bool,
    #[serde(default)]
    pub minimum_agent_version_detected: String,
    #[serde(default)]
    pub minimum_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentVersion {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub is_managed: bool,
    #[serde(default)]
    pub last_conf: String,
    #[serde(default)]
    pub last_conf_as_iso_date_string: String,
    #[serde(default)]
    pub ping_count: i64,
    #[serde(default)]
    pub is_version_deprecated: bool,
    #[serde(default)]
    pub is_version_old: bool,
    #[serde(default)]
    pub version: String,
}

/// Agent endpoints of a project.
pub struct AgentsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> AgentsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Returns links to the per-type agent listings.
    pub async fn list_links(&self, ctx: &Context, project_id: &str) -> Result<(AgentLinks, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/agents", group_path(project_id));
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (agents, mut response) = self.client.send_json::<AgentLinks>(ctx, request).await?;
        response.links = agents.links.clone();
        Ok((agents, response))
    }

    /// Lists agents of one type (`MONITORING`, `BACKUP` or `AUTOMATION`).
    pub async fn list_by_type(
        &self,
        ctx: &Context,
        project_id: &str,
        agent_type: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Agents, Response), ApiError> {
        require("projectID", project_id)?;
        require("agentType", agent_type)?;
        let path = set_query_params(&format!("{}/agents/{}", group_path(project_id), agent_type), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (agents, mut response) = self.client.send_json::<Agents>(ctx, request).await?;
        response.links = agents.links.clone();
        Ok((agents, response))
    }

    pub async fn list_api_keys(
        &self,
        ctx: &Context,
        project_id: &str,
    ) -> Result<(Vec<AgentApiKey>, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/agentapikeys", group_path(project_id));
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create_api_key(
        &self,
        ctx: &Context,
        project_id: &str,
        key: &AgentApiKeysRequest,
    ) -> Result<(AgentApiKey, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/agentapikeys", group_path(project_id));
        let request = self.client.new_request(Method::POST, &path, Some(key))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete_api_key(&self, ctx: &Context, project_id: &str, key_id: &str) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        require("agentApiKeyID", key_id)?;
        let path = format!("{}/agentapikeys/{}", group_path(project_id), key_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }

    /// Returns the agent versions running in a project.
    pub async fn versions(&self, ctx: &Context, project_id: &str) -> Result<(AgentVersions, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/agents/current", group_path(project_id));
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }
}

fn group_path(project_id: &str) -> String {
    format!("{}/groups/{}", PUBLIC_BASE_PATH, project_id)
}

//
//  opsmngr-client
//  api/opsmngr/automation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Automation configuration and status.
//!
//! The automation config is a large document that callers usually fetch,
//! edit and send back whole. Only the fields needed to drive a round trip are
//! typed; everything else is kept in [`AutomationConfig::extra`] so an update
//! never drops server fields.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError};
use crate::api::context::Context;
use crate::api::response::Response;

/// A project's automation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(default)]
    pub processes: Vec<Process>,

    #[serde(default)]
    pub replica_sets: Vec<Value>,

    #[serde(default)]
    pub sharding: Vec<Value>,

    /// Fields not modelled above, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One managed process in the automation config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub process_type: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Goal state reached by each automation agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationStatus {
    #[serde(default)]
    pub processes: Vec<ProcessStatus>,
    #[serde(default)]
    pub goal_version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatus {
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub last_goal_version_achieved: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hostname: String,
}

/// Result of [`AutomationService::update_agent_versions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationConfigAgent {
    #[serde(default)]
    pub automation_agent_version: String,
    #[serde(default)]
    pub backup_agent_version: String,
    #[serde(default)]
    pub monitoring_agent_version: String,
}

/// Automation endpoints of a project.
pub struct AutomationService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> AutomationService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn get_config(&self, ctx: &Context, project_id: &str) -> Result<(AutomationConfig, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/automationConfig", group_path(project_id));
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    /// Replaces the automation config. The server answers with an empty body.
    pub async fn update_config(
        &self,
        ctx: &Context,
        project_id: &str,
        config: &AutomationConfig,
    ) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/automationConfig", group_path(project_id));
        let request = self.client.new_request(Method::PUT, &path, Some(config))?;
        self.client.send(ctx, request).await
    }

    pub async fn get_status(&self, ctx: &Context, project_id: &str) -> Result<(AutomationStatus, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/automationStatus", group_path(project_id));
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    /// Updates every agent in the project to the latest available version.
    pub async fn update_agent_versions(
        &self,
        ctx: &Context,
        project_id: &str,
    ) -> Result<(AutomationConfigAgent, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/automationConfig/updateAgentVersions", group_path(project_id));
        let request = self.client.new_request::<()>(Method::POST, &path, None)?;
        self.client.send_json(ctx, request).await
    }
}

fn group_path(project_id: &str) -> String {
    format!("{}/groups/{}", PUBLIC_BASE_PATH, project_id)
}

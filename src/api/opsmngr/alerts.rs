//
//  opsmngr-client
//  api/opsmngr/alerts.rs
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

/// An alert raised in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub alert_config_id: String,
    #[serde(default)]
    pub event_type_name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    /// `OPEN`, `TRACKING`, `CLOSED` or `CANCELLED`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_and_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledging_username: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

pub type Alerts = PaginatedResponse<Alert>;

/// Filters for [`AlertsService::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertsListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body for [`AlertsService::acknowledge`].
///
/// Leaving `acknowledged_until` unset acknowledges the alert forever.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_until: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement_comment: Option<String>,
}

pub struct AlertsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> AlertsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        ctx: &Context,
        project_id: &str,
        options: Option<&AlertsListOptions>,
    ) -> Result<(Alerts, Response), ApiError> {
        require("projectID", project_id)?;
        let path = set_query_params(&base_path(project_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (alerts, mut response) = self.client.send_json::<Alerts>(ctx, request).await?;
        response.links = alerts.links.clone();
        Ok((alerts, response))
    }

    pub async fn get(&self, ctx: &Context, project_id: &str, alert_id: &str) -> Result<(Alert, Response), ApiError> {
        require("projectID", project_id)?;
        require("alertID", alert_id)?;
        let path = format!("{}/{}", base_path(project_id), alert_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn acknowledge(
        &self,
        ctx: &Context,
        project_id: &str,
        alert_id: &str,
        body: &AcknowledgeRequest,
    ) -> Result<(Alert, Response), ApiError> {
        require("projectID", project_id)?;
        require("alertID", alert_id)?;
        let path = format!("{}/{}", base_path(project_id), alert_id);
        let request = self.client.new_request(Method::PATCH, &path, Some(body))?;
        self.client.send_json(ctx, request).await
    }
}

fn base_path(project_id: &str) -> String {
    format!("{}/groups/{}/alerts", PUBLIC_BASE_PATH, project_id)
}

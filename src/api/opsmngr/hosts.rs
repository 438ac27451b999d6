//
//  opsmngr-client
//  api/opsmngr/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Monitored hosts (MongoDB processes) of a project.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// A MongoDB process known to Ops Manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_id: String,

    pub hostname: String,

    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set_name: Option<String>,

    /// `STANDALONE`, `REPLICA_PRIMARY`, `REPLICA_SECONDARY`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_mechanism_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ping: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// A page of hosts.
pub type Hosts = PaginatedResponse<Host>;

/// Filters for [`HostsService::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    /// Only return hosts of the given cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

/// Host endpoints under `/api/public/v1.0/groups/{id}/hosts`.
pub struct HostsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> HostsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        ctx: &Context,
        project_id: &str,
        options: Option<&HostListOptions>,
    ) -> Result<(Hosts, Response), ApiError> {
        require("projectID", project_id)?;
        let path = set_query_params(&base_path(project_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (hosts, mut response) = self.client.send_json::<Hosts>(ctx, request).await?;
        response.links = hosts.links.clone();
        Ok((hosts, response))
    }

    pub async fn get(&self, ctx: &Context, project_id: &str, host_id: &str) -> Result<(Host, Response), ApiError> {
        require("projectID", project_id)?;
        require("hostID", host_id)?;
        let path = format!("{}/{}", base_path(project_id), host_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    /// Looks a host up by `hostname:port`.
    pub async fn get_by_hostname(
        &self,
        ctx: &Context,
        project_id: &str,
        hostname: &str,
        port: u16,
    ) -> Result<(Host, Response), ApiError> {
        require("projectID", project_id)?;
        require("hostname", hostname)?;
        let path = format!("{}/byName/{}:{}", base_path(project_id), hostname, port);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    /// Adds a process to monitoring.
    pub async fn start_monitoring(
        &self,
        ctx: &Context,
        project_id: &str,
        host: &Host,
    ) -> Result<(Host, Response), ApiError> {
        require("projectID", project_id)?;
        require("hostname", &host.hostname)?;
        let request = self
            .client
            .new_request(Method::POST, &base_path(project_id), Some(host))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn update_monitoring(
        &self,
        ctx: &Context,
        project_id: &str,
        host_id: &str,
        host: &Host,
    ) -> Result<(Host, Response), ApiError> {
        require("projectID", project_id)?;
        require("hostID", host_id)?;
        let path = format!("{}/{}", base_path(project_id), host_id);
        let request = self.client.new_request(Method::PATCH, &path, Some(host))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn stop_monitoring(&self, ctx: &Context, project_id: &str, host_id: &str) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        require("hostID", host_id)?;
        let path = format!("{}/{}", base_path(project_id), host_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }
}

fn base_path(project_id: &str) -> String {
    format!("{}/groups/{}/hosts", PUBLIC_BASE_PATH, project_id)
}

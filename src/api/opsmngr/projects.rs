//
//  opsmngr-client
//  api/opsmngr/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project API types and service.
//!
//! The public API still calls projects "groups", so paths live under
//! `/api/public/v1.0/groups`.
//!
//! # Example
//!
//! ```rust,no_run
//! use opsmngr::api::{Client, Context, OpsManager};
//! use opsmngr::api::opsmngr::projects::Project;
//!
//! # async fn example() -> Result<(), opsmngr::api::ApiError> {
//! let ops = OpsManager::new(Client::builder().build()?);
//! let project = Project {
//!     name: "ProjectFoobar".to_string(),
//!     org_id: "5980cfdf0b6d97029d82f86e".to_string(),
//!     ..Default::default()
//! };
//! let (created, _) = ops.projects().create(&Context::background(), &project, None).await?;
//! println!("created {}", created.id);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// Represents an Ops Manager project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    /// Organization the project belongs to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org_id: String,

    /// Number of agents currently talking to the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_agent_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_counts: Option<HostCount>,

    /// ISO 8601 timestamp of the last agent ping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_api_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Number of hosts of each type in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCount {
    #[serde(default)]
    pub arbiter: u32,
    #[serde(default)]
    pub config: u32,
    #[serde(default)]
    pub primary: u32,
    #[serde(default)]
    pub secondary: u32,
    #[serde(default)]
    pub mongos: u32,
    #[serde(default)]
    pub master: u32,
    #[serde(default)]
    pub slave: u32,
}

/// A page of projects.
pub type Projects = PaginatedResponse<Project>;

/// Query parameters for [`ProjectsService::create`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectOptions {
    /// User to make owner of the new project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_owner_id: Option<String>,
}

/// A team's roles within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRole {
    pub team_id: String,
    #[serde(default)]
    pub role_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Teams assigned to a project.
pub type TeamsAssigned = PaginatedResponse<TeamRole>;

/// Project endpoints under `/api/public/v1.0/groups`.
pub struct ProjectsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> ProjectsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self, ctx: &Context, options: Option<&ListOptions>) -> Result<(Projects, Response), ApiError> {
        let path = set_query_params(&base_path(), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (projects, mut response) = self.client.send_json::<Projects>(ctx, request).await?;
        response.links = projects.links.clone();
        Ok((projects, response))
    }

    /// Gets a single project by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] without calling the server when
    /// `project_id` is empty.
    pub async fn get(&self, ctx: &Context, project_id: &str) -> Result<(Project, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/{}", base_path(), project_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn get_by_name(&self, ctx: &Context, name: &str) -> Result<(Project, Response), ApiError> {
        require("projectName", name)?;
        let path = format!("{}/byName/{}", base_path(), name);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create(
        &self,
        ctx: &Context,
        project: &Project,
        options: Option<&CreateProjectOptions>,
    ) -> Result<(Project, Response), ApiError> {
        require("name", &project.name)?;
        let path = set_query_params(&base_path(), options)?;
        let request = self.client.new_request(Method::POST, &path, Some(project))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, project_id: &str) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/{}", base_path(), project_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }

    /// Lists the teams assigned to a project.
    pub async fn teams(
        &self,
        ctx: &Context,
        project_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(TeamsAssigned, Response), ApiError> {
        require("projectID", project_id)?;
        let path = set_query_params(&format!("{}/{}/teams", base_path(), project_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (teams, mut response) = self.client.send_json::<TeamsAssigned>(ctx, request).await?;
        response.links = teams.links.clone();
        Ok((teams, response))
    }

    /// Assigns teams to a project with the given roles.
    pub async fn add_teams(
        &self,
        ctx: &Context,
        project_id: &str,
        teams: &[TeamRole],
    ) -> Result<(TeamsAssigned, Response), ApiError> {
        require("projectID", project_id)?;
        let path = format!("{}/{}/teams", base_path(), project_id);
        let request = self.client.new_request(Method::POST, &path, Some(teams))?;
        self.client.send_json(ctx, request).await
    }
}

fn base_path() -> String {
    format!("{}/groups", PUBLIC_BASE_PATH)
}

//
//  opsmngr-client
//  api/opsmngr/teams.rs
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

/// An organization team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    /// Usernames to add when creating the team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usernames: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

pub type Teams = PaginatedResponse<Team>;

/// A member of a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

pub type TeamUsers = PaginatedResponse<TeamUser>;

#[derive(Serialize)]
struct TeamRename<'a> {
    name: &'a str,
}

pub struct TeamsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> TeamsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self, ctx: &Context, org_id: &str, options: Option<&ListOptions>) -> Result<(Teams, Response), ApiError> {
        require("orgID", org_id)?;
        let path = set_query_params(&base_path(org_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (teams, mut response) = self.client.send_json::<Teams>(ctx, request).await?;
        response.links = teams.links.clone();
        Ok((teams, response))
    }

    pub async fn get(&self, ctx: &Context, org_id: &str, team_id: &str) -> Result<(Team, Response), ApiError> {
        require("orgID", org_id)?;
        require("teamID", team_id)?;
        let path = format!("{}/{}", base_path(org_id), team_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn get_by_name(&self, ctx: &Context, org_id: &str, name: &str) -> Result<(Team, Response), ApiError> {
        require("orgID", org_id)?;
        require("teamName", name)?;
        let path = format!("{}/byName/{}", base_path(org_id), name);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create(&self, ctx: &Context, org_id: &str, team: &Team) -> Result<(Team, Response), ApiError> {
        require("orgID", org_id)?;
        require("name", &team.name)?;
        let request = self.client.new_request(Method::POST, &base_path(org_id), Some(team))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn rename(
        &self,
        ctx: &Context,
        org_id: &str,
        team_id: &str,
        name: &str,
    ) -> Result<(Team, Response), ApiError> {
        require("orgID", org_id)?;
        require("teamID", team_id)?;
        require("name", name)?;
        let path = format!("{}/{}", base_path(org_id), team_id);
        let request = self
            .client
            .new_request(Method::PATCH, &path, Some(&TeamRename { name }))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, org_id: &str, team_id: &str) -> Result<Response, ApiError> {
        require("orgID", org_id)?;
        require("teamID", team_id)?;
        let path = format!("{}/{}", base_path(org_id), team_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }

    /// Lists the members of a team.
    pub async fn users(
        &self,
        ctx: &Context,
        org_id: &str,
        team_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(TeamUsers, Response), ApiError> {
        require("orgID", org_id)?;
        require("teamID", team_id)?;
        let path = set_query_params(&format!("{}/{}/users", base_path(org_id), team_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (users, mut response) = self.client.send_json::<TeamUsers>(ctx, request).await?;
        response.links = users.links.clone();
        Ok((users, response))
    }
}

fn base_path(org_id: &str) -> String {
    format!("{}/orgs/{}/teams", PUBLIC_BASE_PATH, org_id)
}

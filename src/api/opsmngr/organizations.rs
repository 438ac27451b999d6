//
//  opsmngr-client
//  api/opsmngr/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization API types and service.
//!
//! Organizations are the top-level unit in Ops Manager. They own projects,
//! teams and programmatic API keys.
//!
//! # Hierarchy
//!
//! ```text
//! Organization
//! ├── Projects (groups)
//! │   └── Hosts, agents, automation config, alerts
//! ├── Teams
//! └── Programmatic API keys
//! ```

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::projects::Projects;
use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// Represents an Ops Manager organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier, assigned by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    /// Whether the organization has been deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// A page of organizations.
pub type Organizations = PaginatedResponse<Organization>;

/// Filters for [`OrganizationsService::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationsListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    /// Only return organizations whose name matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted_orgs: Option<bool>,
}

/// Organization endpoints under `/api/public/v1.0/orgs`.
pub struct OrganizationsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> OrganizationsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Lists the organizations visible to the caller.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&OrganizationsListOptions>,
    ) -> Result<(Organizations, Response), ApiError> {
        let path = set_query_params(&base_path(), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (orgs, mut response) = self.client.send_json::<Organizations>(ctx, request).await?;
        response.links = orgs.links.clone();
        Ok((orgs, response))
    }

    pub async fn get(&self, ctx: &Context, org_id: &str) -> Result<(Organization, Response), ApiError> {
        require("orgID", org_id)?;
        let path = format!("{}/{}", base_path(), org_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    /// Lists the projects that belong to an organization.
    pub async fn projects(
        &self,
        ctx: &Context,
        org_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Projects, Response), ApiError> {
        require("orgID", org_id)?;
        let path = set_query_params(&format!("{}/{}/groups", base_path(), org_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (projects, mut response) = self.client.send_json::<Projects>(ctx, request).await?;
        response.links = projects.links.clone();
        Ok((projects, response))
    }

    pub async fn create(&self, ctx: &Context, org: &Organization) -> Result<(Organization, Response), ApiError> {
        require("name", &org.name)?;
        let request = self.client.new_request(Method::POST, &base_path(), Some(org))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, org_id: &str) -> Result<Response, ApiError> {
        require("orgID", org_id)?;
        let path = format!("{}/{}", base_path(), org_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }
}

fn base_path() -> String {
    format!("{}/orgs", PUBLIC_BASE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::opsmngr::test::{expect_call, no_calls, ops_with};

    #[tokio::test]
    async fn test_list_with_name_filter() {
        let body = r#"{
            "links": [{"rel": "self", "href": "https://opsmanager.example.com:8080/api/public/v1.0/orgs?pageNum=1&itemsPerPage=100"}],
            "results": [{"id": "5980cfdf0b6d97029d82f86e", "name": "FirstOrg", "isDeleted": false, "links": []}],
            "totalCount": 1
        }"#;
        let ops = ops_with(expect_call("GET", "api/public/v1.0/orgs?name=FirstOrg", 200, body));
        let options = OrganizationsListOptions {
            name: Some("FirstOrg".to_string()),
            ..Default::default()
        };

        let (orgs, response) = ops
            .organizations()
            .list(&Context::background(), Some(&options))
            .await
            .unwrap();
        assert_eq!(orgs.results[0].name, "FirstOrg");
        assert_eq!(orgs.total_count, 1);
        assert_eq!(response.current_page().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_requires_id() {
        let ops = ops_with(no_calls());
        let err = ops.organizations().get(&Context::background(), "").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { arg: "orgID", .. }));
    }

    #[tokio::test]
    async fn test_create_sends_name_only() {
        let mut transport = crate::api::transport::test::MockTransport::new();
        transport.expect_execute().once().return_once(|request| {
            assert_eq!(request.body_text(), Some(r#"{"name":"NewOrg"}"#));
            Ok(crate::api::transport::test::raw_response(
                request.url,
                200,
                br#"{"id":"1","name":"NewOrg"}"#.to_vec(),
            ))
        });
        let ops = ops_with(transport);
        let org = Organization {
            name: "NewOrg".to_string(),
            ..Default::default()
        };

        let (created, _) = ops.organizations().create(&Context::background(), &org).await.unwrap();
        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn test_delete() {
        let ops = ops_with(expect_call("DELETE", "api/public/v1.0/orgs/1", 202, ""));
        let response = ops.organizations().delete(&Context::background(), "1").await.unwrap();
        assert_eq!(response.status.as_u16(), 202);
    }
}

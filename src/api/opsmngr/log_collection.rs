//
//  opsmngr-client
//  api/opsmngr/log_collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Log collection jobs.
//!
//! A job gathers logs from the processes of a resource into one archive;
//! once it finishes, [`LogCollectionService::download`] streams the gzip
//! archive into a writer.

use std::io::Write;
use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// A log collection job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCollectionJob {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub expiration_date: String,
    /// `IN_PROGRESS`, `SUCCESS`, `FAILURE` or `MARKED_FOR_EXPIRY`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub redacted: bool,
    #[serde(default)]
    pub log_types: Vec<String>,
    #[serde(default)]
    pub size_requested_per_file_bytes: i64,
    #[serde(default)]
    pub uncompressed_disk_space_bytes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

pub type LogCollectionJobs = PaginatedResponse<LogCollectionJob>;

/// Filters for [`LogCollectionService::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    /// Also return the child jobs of each job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

/// Body for [`LogCollectionService::create`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCollectionRequest {
    pub resource_type: String,
    pub resource_name: String,
    pub redacted: bool,
    pub size_requested_per_file_bytes: i64,
    pub log_types: Vec<String>,
}

/// Body returned by [`LogCollectionService::create`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogCollectionJobId {
    #[serde(default)]
    pub id: String,
}

pub struct LogCollectionService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> LogCollectionService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        ctx: &Context,
        project_id: &str,
        options: Option<&LogListOptions>,
    ) -> Result<(LogCollectionJobs, Response), ApiError> {
        require("projectID", project_id)?;
        let path = set_query_params(&base_path(project_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (jobs, mut response) = self.client.send_json::<LogCollectionJobs>(ctx, request).await?;
        response.links = jobs.links.clone();
        Ok((jobs, response))
    }

    pub async fn get(
        &self,
        ctx: &Context,
        project_id: &str,
        job_id: &str,
        options: Option<&LogListOptions>,
    ) -> Result<(LogCollectionJob, Response), ApiError> {
        require("projectID", project_id)?;
        require("jobID", job_id)?;
        let path = set_query_params(&format!("{}/{}", base_path(project_id), job_id), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create(
        &self,
        ctx: &Context,
        project_id: &str,
        job: &LogCollectionRequest,
    ) -> Result<(LogCollectionJobId, Response), ApiError> {
        require("projectID", project_id)?;
        require("resourceName", &job.resource_name)?;
        let request = self
            .client
            .new_request(Method::POST, &base_path(project_id), Some(job))?;
        self.client.send_json(ctx, request).await
    }

    /// Streams the finished job's gzip archive into `out`.
    pub async fn download(
        &self,
        ctx: &Context,
        project_id: &str,
        job_id: &str,
        out: &mut (dyn Write + Send),
    ) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        require("jobID", job_id)?;
        let path = format!("{}/{}/download", base_path(project_id), job_id);
        let request = self.client.new_gzip_request(Method::GET, &path)?;
        self.client.send_to_writer(ctx, request, out).await
    }

    pub async fn delete(&self, ctx: &Context, project_id: &str, job_id: &str) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        require("jobID", job_id)?;
        let path = format!("{}/{}", base_path(project_id), job_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }
}

fn base_path(project_id: &str) -> String {
    format!("{}/groups/{}/logCollectionJobs", PUBLIC_BASE_PATH, project_id)
}

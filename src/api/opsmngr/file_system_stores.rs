//
//  opsmngr-client
//  api/opsmngr/file_system_stores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Backup file system store configurations (admin API).

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError, Link, ListOptions, PaginatedResponse};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// A file system store used for backup snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemStoreConfiguration {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_credentials: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_factor: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mms_config_store_ids: Option<Vec<String>>,

    /// `GZIP` or `NONE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_compression_setting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mmapv1_compression_setting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

pub type FileSystemStoreConfigurations = PaginatedResponse<FileSystemStoreConfiguration>;

pub struct FileSystemStoresService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> FileSystemStoresService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&ListOptions>,
    ) -> Result<(FileSystemStoreConfigurations, Response), ApiError> {
        let path = set_query_params(&base_path(), options)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (stores, mut response) = self
            .client
            .send_json::<FileSystemStoreConfigurations>(ctx, request)
            .await?;
        response.links = stores.links.clone();
        Ok((stores, response))
    }

    pub async fn get(
        &self,
        ctx: &Context,
        store_id: &str,
    ) -> Result<(FileSystemStoreConfiguration, Response), ApiError> {
        require("fileSystemID", store_id)?;
        let path = format!("{}/{}", base_path(), store_id);
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.send_json(ctx, request).await
    }

    pub async fn create(
        &self,
        ctx: &Context,
        store: &FileSystemStoreConfiguration,
    ) -> Result<(FileSystemStoreConfiguration, Response), ApiError> {
        require("id", &store.id)?;
        let request = self.client.new_request(Method::POST, &base_path(), Some(store))?;
        self.client.send_json(ctx, request).await
    }

    /// Replaces the configuration of `store_id`.
    pub async fn update(
        &self,
        ctx: &Context,
        store_id: &str,
        store: &FileSystemStoreConfiguration,
    ) -> Result<(FileSystemStoreConfiguration, Response), ApiError> {
        require("fileSystemID", store_id)?;
        let path = format!("{}/{}", base_path(), store_id);
        let request = self.client.new_request(Method::PUT, &path, Some(store))?;
        self.client.send_json(ctx, request).await
    }

    pub async fn delete(&self, ctx: &Context, store_id: &str) -> Result<Response, ApiError> {
        require("fileSystemID", store_id)?;
        let path = format!("{}/{}", base_path(), store_id);
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.send(ctx, request).await
    }
}

fn base_path() -> String {
    format!("{}/admin/backup/snapshot/fileSystemConfigs", PUBLIC_BASE_PATH)
}

//
//  opsmngr-client
//  api/opsmngr/diagnostics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project diagnostics archive download.

use std::io::Write;
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// Query parameters for [`DiagnosticsService::get`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsListOptions {
    /// Maximum age of the included log entries, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Only include data from the last `minutes` minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
}

pub struct DiagnosticsService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> DiagnosticsService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Streams the project's gzip diagnostics archive into `out`.
    pub async fn get(
        &self,
        ctx: &Context,
        project_id: &str,
        options: Option<&DiagnosticsListOptions>,
        out: &mut (dyn Write + Send),
    ) -> Result<Response, ApiError> {
        require("projectID", project_id)?;
        let path = set_query_params(
            &format!("{}/groups/{}/diagnostics", PUBLIC_BASE_PATH, project_id),
            options,
        )?;
        let request = self.client.new_gzip_request(Method::GET, &path)?;
        self.client.send_to_writer(ctx, request, out).await
    }
}

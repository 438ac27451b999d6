//
//  opsmngr-client
//  api/opsmngr/advisor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upgrade advisor.
//!
//! The upgrade check endpoint reports one record per host for every
//! requirement that blocks an upgrade to a target version. Hosts sharing the
//! same requirement are folded into a single step by
//! [`group_upgrade_steps`].
//!
//! # Grouping keys
//!
//! | Category | Key |
//! |----------|-----|
//! | Operating system | (base version, current version, target version) |
//! | MongoDB | (current version, target version) |
//! | Agents | (current version, target version) |
//!
//! Keys compare as exact strings. Hosts of a group are concatenated in input
//! order and are not deduplicated. The order of steps within a category is
//! unspecified.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::PUBLIC_BASE_PATH;
use crate::api::client::{Client, RequestDoer};
use crate::api::common::{require, ApiError};
use crate::api::context::Context;
use crate::api::query::set_query_params;
use crate::api::response::Response;

/// Per-host operating system requirement as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOsRequirement {
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub base_version: String,
    #[serde(default)]
    pub current_version: String,
    #[serde(default)]
    pub target_version: String,
}

/// Per-host MongoDB or agent version requirement as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVersionRequirement {
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub current_version: String,
    #[serde(default)]
    pub target_version: String,
}

/// One ungrouped upgrade step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUpgradeStep {
    #[serde(default)]
    pub os: Vec<RawOsRequirement>,
    #[serde(default)]
    pub mongodb: Vec<RawVersionRequirement>,
    #[serde(default)]
    pub agents: Vec<RawVersionRequirement>,
}

/// Body of the upgrade check endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUpgradeCheck {
    #[serde(default)]
    pub target_version: String,
    #[serde(default)]
    pub steps: Vec<RawUpgradeStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystemStep {
    pub hosts: Vec<String>,
    pub base_version: String,
    pub current_version: String,
    pub target_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoDbStep {
    pub hosts: Vec<String>,
    pub current_version: String,
    pub target_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStep {
    pub hosts: Vec<String>,
    pub current_version: String,
    pub target_version: String,
}

/// A grouped upgrade step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpgradeStep {
    pub os: Vec<OperatingSystemStep>,
    pub mongodb: Vec<MongoDbStep>,
    pub agents: Vec<AgentStep>,
}

/// Result of [`AdvisorService::upgrade_check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeCheck {
    pub target_version: String,
    pub steps: Vec<UpgradeStep>,
}

/// Folds per-host requirements into grouped steps, one per input step.
pub fn group_upgrade_steps(steps: &[RawUpgradeStep]) -> Vec<UpgradeStep> {
    steps
        .iter()
        .map(|step| UpgradeStep {
            os: group_os(&step.os),
            mongodb: group_versions(&step.mongodb, |hosts, current_version, target_version| MongoDbStep {
                hosts,
                current_version,
                target_version,
            }),
            agents: group_versions(&step.agents, |hosts, current_version, target_version| AgentStep {
                hosts,
                current_version,
                target_version,
            }),
        })
        .collect()
}

fn group_os(requirements: &[RawOsRequirement]) -> Vec<OperatingSystemStep> {
    let mut groups: HashMap<(&str, &str, &str), Vec<String>> = HashMap::new();
    for req in requirements {
        groups
            .entry((req.base_version.as_str(), req.current_version.as_str(), req.target_version.as_str()))
            .or_default()
            .extend(req.hosts.iter().cloned());
    }
    trace!(raw = requirements.len(), grouped = groups.len(), "grouped os requirements");
    groups
        .into_iter()
        .map(|((base, current, target), hosts)| OperatingSystemStep {
            hosts,
            base_version: base.to_string(),
            current_version: current.to_string(),
            target_version: target.to_string(),
        })
        .collect()
}

fn group_versions<S, F>(requirements: &[RawVersionRequirement], make: F) -> Vec<S>
where
    F: Fn(Vec<String>, String, String) -> S,
{
    let mut groups: HashMap<(&str, &str), Vec<String>> = HashMap::new();
    for req in requirements {
        groups
            .entry((req.current_version.as_str(), req.target_version.as_str()))
            .or_default()
            .extend(req.hosts.iter().cloned());
    }
    groups
        .into_iter()
        .map(|((current, target), hosts)| make(hosts, current.to_string(), target.to_string()))
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpgradeCheckQuery<'a> {
    target_version: &'a str,
}

pub struct AdvisorService<C = Client> {
    client: Arc<C>,
}

impl<C: RequestDoer> AdvisorService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetches the upgrade requirements for moving a project to
    /// `target_version` and groups them.
    pub async fn upgrade_check(
        &self,
        ctx: &Context,
        project_id: &str,
        target_version: &str,
    ) -> Result<(UpgradeCheck, Response), ApiError> {
        require("projectID", project_id)?;
        require("targetVersion", target_version)?;
        let path = set_query_params(
            &format!("{}/groups/{}/upgradeCheck", PUBLIC_BASE_PATH, project_id),
            Some(&UpgradeCheckQuery { target_version }),
        )?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;
        let (raw, response) = self.client.send_json::<RawUpgradeCheck>(ctx, request).await?;

        let check = UpgradeCheck {
            target_version: raw.target_version,
            steps: group_upgrade_steps(&raw.steps),
        };
        Ok((check, response))
    }
}

//
//  opsmngr-client
//  api/opsmngr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Ops Manager Public API v1.0 resource services.
//!
//! Each submodule binds one resource family. A service holds a shared handle
//! to a [`RequestDoer`] (the [`Client`] in production), validates required
//! identifiers before building anything, and returns the decoded value with
//! the [`Response`](super::Response) metadata.
//!
//! # Module Organization
//!
//! - [`organizations`] - Organizations and their projects
//! - [`projects`] - Projects (groups) and team assignments
//! - [`hosts`] - Monitored MongoDB processes
//! - [`agents`] - Agents, agent API keys and versions
//! - [`automation`] - Automation configuration and status
//! - [`alerts`] - Project alerts
//! - [`api_keys`] - Organization programmatic API keys
//! - [`teams`] - Organization teams
//! - [`file_system_stores`] - Backup file system store configurations
//! - [`diagnostics`] - Project diagnostics archives
//! - [`log_collection`] - Log collection jobs and downloads
//! - [`service_version`] - Server version probe
//! - [`advisor`] - Upgrade requirement checks
//!
//! # Example
//!
//! ```rust,no_run
//! use opsmngr::api::{Client, Context, OpsManager};
//!
//! # async fn example() -> Result<(), opsmngr::api::ApiError> {
//! let ops = OpsManager::new(Client::builder().build()?);
//! let ctx = Context::background();
//!
//! let (hosts, _) = ops.hosts().list(&ctx, "5e66185d917b220fbd8bb4d1", None).await?;
//! for host in hosts.results {
//!     println!("{}:{}", host.hostname, host.port);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use super::client::{Client, RequestDoer};

pub mod advisor;
pub mod agents;
pub mod alerts;
pub mod api_keys;
pub mod automation;
pub mod diagnostics;
pub mod file_system_stores;
pub mod hosts;
pub mod log_collection;
pub mod organizations;
pub mod projects;
pub mod service_version;
pub mod teams;

pub use advisor::AdvisorService;
pub use agents::AgentsService;
pub use alerts::AlertsService;
pub use api_keys::ApiKeysService;
pub use automation::AutomationService;
pub use diagnostics::DiagnosticsService;
pub use file_system_stores::FileSystemStoresService;
pub use hosts::HostsService;
pub use log_collection::LogCollectionService;
pub use organizations::OrganizationsService;
pub use projects::ProjectsService;
pub use service_version::ServiceVersionService;
pub use teams::TeamsService;

/// Prefix shared by every public endpoint.
pub(crate) const PUBLIC_BASE_PATH: &str = "api/public/v1.0";

/// Entry point handing out one service per resource family.
///
/// All services share the same underlying client.
#[derive(Debug)]
pub struct OpsManager<C = Client> {
    client: Arc<C>,
}

impl<C> Clone for OpsManager<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: RequestDoer> OpsManager<C> {
    pub fn new(client: C) -> Self {
        Self::from_shared(Arc::new(client))
    }

    pub fn from_shared(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn organizations(&self) -> OrganizationsService<C> {
        OrganizationsService::new(Arc::clone(&self.client))
    }

    pub fn projects(&self) -> ProjectsService<C> {
        ProjectsService::new(Arc::clone(&self.client))
    }

    pub fn hosts(&self) -> HostsService<C> {
        HostsService::new(Arc::clone(&self.client))
    }

    pub fn agents(&self) -> AgentsService<C> {
        AgentsService::new(Arc::clone(&self.client))
    }

    pub fn automation(&self) -> AutomationService<C> {
        AutomationService::new(Arc::clone(&self.client))
    }

    pub fn alerts(&self) -> AlertsService<C> {
        AlertsService::new(Arc::clone(&self.client))
    }

    pub fn api_keys(&self) -> ApiKeysService<C> {
        ApiKeysService::new(Arc::clone(&self.client))
    }

    pub fn teams(&self) -> TeamsService<C> {
        TeamsService::new(Arc::clone(&self.client))
    }

    pub fn file_system_stores(&self) -> FileSystemStoresService<C> {
        FileSystemStoresService::new(Arc::clone(&self.client))
    }

    pub fn diagnostics(&self) -> DiagnosticsService<C> {
        DiagnosticsService::new(Arc::clone(&self.client))
    }

    pub fn log_collection(&self) -> LogCollectionService<C> {
        LogCollectionService::new(Arc::clone(&self.client))
    }

    pub fn service_version(&self) -> ServiceVersionService<C> {
        ServiceVersionService::new(Arc::clone(&self.client))
    }

    pub fn advisor(&self) -> AdvisorService<C> {
        AdvisorService::new(Arc::clone(&self.client))
    }
}

//! Entry point bundling the resource APIs around one configuration.
//!
//! # Design
//! `FoundationClient` holds only the shared, read-only `Configuration`. It
//! builds `Call` values and never performs I/O itself; the caller picks a
//! blocking or async transport at dispatch time.

use std::sync::Arc;

use crate::api::{AppsApi, FeaturesApi, GrantsApi, OrganizationsApi, TenantsApi, UsersApi};
use crate::config::Configuration;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct FoundationClient {
    config: Arc<Configuration>,
}

impl FoundationClient {
    pub fn new(config: Configuration) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Shorthand for `Configuration::from_env` followed by `new`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(Configuration::from_env()?)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn organizations(&self) -> OrganizationsApi {
        OrganizationsApi::new(Arc::clone(&self.config))
    }

    pub fn tenants(&self) -> TenantsApi {
        TenantsApi::new(Arc::clone(&self.config))
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(Arc::clone(&self.config))
    }

    pub fn apps(&self) -> AppsApi {
        AppsApi::new(Arc::clone(&self.config))
    }

    pub fn features(&self) -> FeaturesApi {
        FeaturesApi::new(Arc::clone(&self.config))
    }

    pub fn grants(&self) -> GrantsApi {
        GrantsApi::new(Arc::clone(&self.config))
    }
}

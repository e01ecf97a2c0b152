use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{Grant, GrantList, PatchOperation};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const GRANTS: Resource = Resource {
    collection: "/grants",
    item: "/grants/{grant-id}",
    id_param: "grant-id",
};

/// Operations on `/grants`.
#[derive(Debug, Clone)]
pub struct GrantsApi {
    config: Arc<Configuration>,
}

impl GrantsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /grants`
    pub fn list_grants(&self, options: &ListOptions) -> Call<GrantList> {
        GRANTS.list(&self.config, "list_grants", options)
    }

    /// `POST /grants`, answered with 201.
    pub fn create_grant(
        &self,
        grant: &Grant,
        options: &RequestOptions,
    ) -> Result<Call<Grant>, ApiError> {
        GRANTS.create(&self.config, "create_grant", grant, options)
    }

    /// `GET /grants/{grant-id}`
    pub fn get_grant(&self, grant_id: &str, options: &GetOptions) -> Result<Call<Grant>, ApiError> {
        GRANTS.get(&self.config, "get_grant", grant_id, options)
    }

    /// `PATCH /grants/{grant-id}`
    pub fn patch_grant(
        &self,
        grant_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<Grant>, ApiError> {
        GRANTS.patch(&self.config, "patch_grant", grant_id, patch, options)
    }

    /// `PUT /grants/{grant-id}`
    pub fn replace_grant(
        &self,
        grant_id: &str,
        grant: &Grant,
        options: &WriteOptions,
    ) -> Result<Call<Grant>, ApiError> {
        GRANTS.replace(&self.config, "replace_grant", grant_id, grant, options)
    }

    /// `DELETE /grants/{grant-id}`, answered with 204.
    pub fn delete_grant(
        &self,
        grant_id: &str,
        options: &WriteOptions,
    ) -> Result<Call<()>, ApiError> {
        GRANTS.delete(&self.config, "delete_grant", grant_id, options)
    }
}

use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{AppList, Organization, OrganizationList, PatchOperation, TenantList, UserList};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const ORGANIZATIONS: Resource = Resource {
    collection: "/organizations",
    item: "/organizations/{organization-id}",
    id_param: "organization-id",
};

/// Operations on `/organizations` and its child collections.
#[derive(Debug, Clone)]
pub struct OrganizationsApi {
    config: Arc<Configuration>,
}

impl OrganizationsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /organizations`
    pub fn list_organizations(&self, options: &ListOptions) -> Call<OrganizationList> {
        ORGANIZATIONS.list(&self.config, "list_organizations", options)
    }

    /// `POST /organizations`, answered with 201.
    pub fn create_organization(
        &self,
        organization: &Organization,
        options: &RequestOptions,
    ) -> Result<Call<Organization>, ApiError> {
        ORGANIZATIONS.create(&self.config, "create_organization", organization, options)
    }

    /// `GET /organizations/{organization-id}`
    pub fn get_organization(
        &self,
        organization_id: &str,
        options: &GetOptions,
    ) -> Result<Call<Organization>, ApiError> {
        ORGANIZATIONS.get(&self.config, "get_organization", organization_id, options)
    }

    /// `PATCH /organizations/{organization-id}`
    pub fn patch_organization(
        &self,
        organization_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<Organization>, ApiError> {
        ORGANIZATIONS.patch(&self.config, "patch_organization", organization_id, patch, options)
    }

    /// `PUT /organizations/{organization-id}`
    pub fn replace_organization(
        &self,
        organization_id: &str,
        organization: &Organization,
        options: &WriteOptions,
    ) -> Result<Call<Organization>, ApiError> {
        ORGANIZATIONS.replace(
            &self.config,
            "replace_organization",
            organization_id,
            organization,
            options,
        )
    }

    /// `DELETE /organizations/{organization-id}`, answered with 204.
    pub fn delete_organization(
        &self,
        organization_id: &str,
        options: &WriteOptions,
    ) -> Result<Call<()>, ApiError> {
        ORGANIZATIONS.delete(&self.config, "delete_organization", organization_id, options)
    }

    /// `GET /organizations/{organization-id}/apps`
    pub fn list_organization_apps(
        &self,
        organization_id: &str,
        options: &ListOptions,
    ) -> Result<Call<AppList>, ApiError> {
        ORGANIZATIONS.list_related(
            &self.config,
            "list_organization_apps",
            "/organizations/{organization-id}/apps",
            organization_id,
            options,
        )
    }

    /// `GET /organizations/{organization-id}/tenants`
    pub fn list_organization_tenants(
        &self,
        organization_id: &str,
        options: &ListOptions,
    ) -> Result<Call<TenantList>, ApiError> {
        ORGANIZATIONS.list_related(
            &self.config,
            "list_organization_tenants",
            "/organizations/{organization-id}/tenants",
            organization_id,
            options,
        )
    }

    /// `GET /organizations/{organization-id}/users`
    pub fn list_organization_users(
        &self,
        organization_id: &str,
        options: &ListOptions,
    ) -> Result<Call<UserList>, ApiError> {
        ORGANIZATIONS.list_related(
            &self.config,
            "list_organization_users",
            "/organizations/{organization-id}/users",
            organization_id,
            options,
        )
    }
}

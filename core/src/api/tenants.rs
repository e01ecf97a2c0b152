use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{PatchOperation, Tenant, TenantList};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const TENANTS: Resource = Resource {
    collection: "/tenants",
    item: "/tenants/{tenant-id}",
    id_param: "tenant-id",
};

/// Operations on `/tenants`.
#[derive(Debug, Clone)]
pub struct TenantsApi {
    config: Arc<Configuration>,
}

impl TenantsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /tenants`
    pub fn list_tenants(&self, options: &ListOptions) -> Call<TenantList> {
        TENANTS.list(&self.config, "list_tenants", options)
    }

    /// `POST /tenants`, answered with 201.
    pub fn create_tenant(
        &self,
        tenant: &Tenant,
        options: &RequestOptions,
    ) -> Result<Call<Tenant>, ApiError> {
        TENANTS.create(&self.config, "create_tenant", tenant, options)
    }

    /// `GET /tenants/{tenant-id}`
    pub fn get_tenant(
        &self,
        tenant_id: &str,
        options: &GetOptions,
    ) -> Result<Call<Tenant>, ApiError> {
        TENANTS.get(&self.config, "get_tenant", tenant_id, options)
    }

    /// `PATCH /tenants/{tenant-id}`
    pub fn patch_tenant(
        &self,
        tenant_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<Tenant>, ApiError> {
        TENANTS.patch(&self.config, "patch_tenant", tenant_id, patch, options)
    }

    /// `PUT /tenants/{tenant-id}`
    pub fn replace_tenant(
        &self,
        tenant_id: &str,
        tenant: &Tenant,
        options: &WriteOptions,
    ) -> Result<Call<Tenant>, ApiError> {
        TENANTS.replace(&self.config, "replace_tenant", tenant_id, tenant, options)
    }

    /// `DELETE /tenants/{tenant-id}`, answered with 204.
    pub fn delete_tenant(
        &self,
        tenant_id: &str,
        options: &WriteOptions,
    ) -> Result<Call<()>, ApiError> {
        TENANTS.delete(&self.config, "delete_tenant", tenant_id, options)
    }
}

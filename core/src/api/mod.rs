//! Resource APIs.
//!
//! # Design
//! Every resource exposes the same CRUD shape over a collection path and an
//! item path. `Resource` builds those operations once, generically over the
//! DTO type; the per-resource APIs are thin, named wrappers that fix the
//! operation name and the response type of each call.

mod apps;
mod features;
mod grants;
mod organizations;
mod tenants;
mod users;

pub use apps::AppsApi;
pub use features::FeaturesApi;
pub use grants::GrantsApi;
pub use organizations::OrganizationsApi;
pub use tenants::TenantsApi;
pub use users::UsersApi;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{PagedList, PatchOperation};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};
use crate::request::RequestBuilder;

/// Paths of one resource type.
pub(crate) struct Resource {
    /// e.g. `/organizations`
    pub(crate) collection: &'static str,
    /// e.g. `/organizations/{organization-id}`
    pub(crate) item: &'static str,
    /// Placeholder name used in `item`, e.g. `organization-id`.
    pub(crate) id_param: &'static str,
}

impl Resource {
    pub(crate) fn list<T: DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        options: &ListOptions,
    ) -> Call<PagedList<T>> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Get, self.collection)
            .list_options(options)
            .build();
        Call::new(operation, request, config.debug)
    }

    /// List a child collection such as `/organizations/{organization-id}/users`.
    pub(crate) fn list_related<T: DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        template: &'static str,
        id: &str,
        options: &ListOptions,
    ) -> Result<Call<PagedList<T>>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Get, template)
            .path_param(self.id_param, id)?
            .list_options(options)
            .build();
        Ok(Call::new(operation, request, config.debug))
    }

    pub(crate) fn create<T: Serialize + DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<Call<T>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Post, self.collection)
            .request_options(options)
            .json_body(body)?
            .build();
        Ok(Call::new(operation, request, config.debug))
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        id: &str,
        options: &GetOptions,
    ) -> Result<Call<T>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Get, self.item)
            .path_param(self.id_param, id)?
            .get_options(options)
            .build();
        Ok(Call::new(operation, request, config.debug))
    }

    pub(crate) fn patch<T: DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<T>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Patch, self.item)
            .path_param(self.id_param, id)?
            .write_options(options)
            .json_body(&patch)?
            .build();
        Ok(Call::new(operation, request, config.debug))
    }

    pub(crate) fn replace<T: Serialize + DeserializeOwned>(
        &self,
        config: &Configuration,
        operation: &'static str,
        id: &str,
        body: &T,
        options: &WriteOptions,
    ) -> Result<Call<T>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Put, self.item)
            .path_param(self.id_param, id)?
            .write_options(options)
            .json_body(body)?
            .build();
        Ok(Call::new(operation, request, config.debug))
    }

    pub(crate) fn delete(
        &self,
        config: &Configuration,
        operation: &'static str,
        id: &str,
        options: &WriteOptions,
    ) -> Result<Call<()>, ApiError> {
        let request = RequestBuilder::new(config, operation, HttpMethod::Delete, self.item)
            .path_param(self.id_param, id)?
            .write_options(options)
            .build();
        Ok(Call::new(operation, request, config.debug))
    }
}

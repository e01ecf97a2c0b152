use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{PatchOperation, User, UserList};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const USERS: Resource = Resource {
    collection: "/users",
    item: "/users/{user-id}",
    id_param: "user-id",
};

/// Operations on `/users`.
#[derive(Debug, Clone)]
pub struct UsersApi {
    config: Arc<Configuration>,
}

impl UsersApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /users`
    pub fn list_users(&self, options: &ListOptions) -> Call<UserList> {
        USERS.list(&self.config, "list_users", options)
    }

    /// `POST /users`, answered with 201.
    pub fn create_user(
        &self,
        user: &User,
        options: &RequestOptions,
    ) -> Result<Call<User>, ApiError> {
        USERS.create(&self.config, "create_user", user, options)
    }

    /// `GET /users/{user-id}`
    pub fn get_user(&self, user_id: &str, options: &GetOptions) -> Result<Call<User>, ApiError> {
        USERS.get(&self.config, "get_user", user_id, options)
    }

    /// `PATCH /users/{user-id}`
    pub fn patch_user(
        &self,
        user_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<User>, ApiError> {
        USERS.patch(&self.config, "patch_user", user_id, patch, options)
    }

    /// `PUT /users/{user-id}`
    pub fn replace_user(
        &self,
        user_id: &str,
        user: &User,
        options: &WriteOptions,
    ) -> Result<Call<User>, ApiError> {
        USERS.replace(&self.config, "replace_user", user_id, user, options)
    }

    /// `DELETE /users/{user-id}`, answered with 204.
    pub fn delete_user(&self, user_id: &str, options: &WriteOptions) -> Result<Call<()>, ApiError> {
        USERS.delete(&self.config, "delete_user", user_id, options)
    }
}

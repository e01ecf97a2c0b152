//! Wire-format DTOs for the foundation API.
//!
//! # Design
//! Field names and optionality follow the server's JSON contract
//! (`camelCase`, absent rather than `null` for unset optionals). The types are
//! defined independently of the mock server, whose integration tests catch
//! schema drift.

mod app;
mod common;
mod feature;
mod grant;
mod organization;
mod tenant;
mod user;

pub use app::{App, AppList};
pub use common::{
    Aspect, ErrorDetail, InstanceMeta, PagedList, PatchOp, PatchOperation, Reference, Tag,
    VersionError,
};
pub use feature::{Feature, FeatureList};
pub use grant::{Grant, GrantList};
pub use organization::{Organization, OrganizationList};
pub use tenant::{Tenant, TenantList};
pub use user::{Email, User, UserList, UserName};

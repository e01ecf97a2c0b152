use serde::{Deserialize, Serialize};

use super::common::{Aspect, InstanceMeta, PagedList, Reference, Tag};

/// A tenant belongs to exactly one organization and may nest under another
/// tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<InstanceMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<Aspect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_tenant: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Tenant {
    pub fn new(display_name: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            organization: Some(Reference::to(organization_id)),
            ..Self::default()
        }
    }
}

pub type TenantList = PagedList<Tenant>;

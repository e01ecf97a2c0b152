use serde::{Deserialize, Serialize};

use super::common::{Aspect, InstanceMeta, PagedList, Reference, Tag};

/// A set of permissions on a single feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
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
    pub feature: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Grant {
    pub fn new(display_name: impl Into<String>, feature_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            feature: Some(Reference::to(feature_id)),
            ..Self::default()
        }
    }
}

pub type GrantList = PagedList<Grant>;

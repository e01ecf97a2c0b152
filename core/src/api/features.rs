use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{Feature, FeatureList, GrantList, PatchOperation};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const FEATURES: Resource = Resource {
    collection: "/features",
    item: "/features/{feature-id}",
    id_param: "feature-id",
};

/// Operations on `/features` and the grants attached to a feature.
#[derive(Debug, Clone)]
pub struct FeaturesApi {
    config: Arc<Configuration>,
}

impl FeaturesApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /features`
    pub fn list_features(&self, options: &ListOptions) -> Call<FeatureList> {
        FEATURES.list(&self.config, "list_features", options)
    }

    /// `POST /features`, answered with 201.
    pub fn create_feature(
        &self,
        feature: &Feature,
        options: &RequestOptions,
    ) -> Result<Call<Feature>, ApiError> {
        FEATURES.create(&self.config, "create_feature", feature, options)
    }

    /// `GET /features/{feature-id}`
    pub fn get_feature(
        &self,
        feature_id: &str,
        options: &GetOptions,
    ) -> Result<Call<Feature>, ApiError> {
        FEATURES.get(&self.config, "get_feature", feature_id, options)
    }

    /// `PATCH /features/{feature-id}`
    pub fn patch_feature(
        &self,
        feature_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<Feature>, ApiError> {
        FEATURES.patch(&self.config, "patch_feature", feature_id, patch, options)
    }

    /// `PUT /features/{feature-id}`
    pub fn replace_feature(
        &self,
        feature_id: &str,
        feature: &Feature,
        options: &WriteOptions,
    ) -> Result<Call<Feature>, ApiError> {
        FEATURES.replace(&self.config, "replace_feature", feature_id, feature, options)
    }

    /// `DELETE /features/{feature-id}`, answered with 204.
    pub fn delete_feature(
        &self,
        feature_id: &str,
        options: &WriteOptions,
    ) -> Result<Call<()>, ApiError> {
        FEATURES.delete(&self.config, "delete_feature", feature_id, options)
    }

    /// `GET /features/{feature-id}/grants`
    pub fn list_feature_grants(
        &self,
        feature_id: &str,
        options: &ListOptions,
    ) -> Result<Call<GrantList>, ApiError> {
        FEATURES.list_related(
            &self.config,
            "list_feature_grants",
            "/features/{feature-id}/grants",
            feature_id,
            options,
        )
    }
}

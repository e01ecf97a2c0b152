use std::sync::Arc;

use super::Resource;
use crate::call::Call;
use crate::config::Configuration;
use crate::error::ApiError;
use crate::models::{App, AppList, FeatureList, PatchOperation};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const APPS: Resource = Resource {
    collection: "/apps",
    item: "/apps/{app-id}",
    id_param: "app-id",
};

/// Operations on `/apps` and the features an app declares.
#[derive(Debug, Clone)]
pub struct AppsApi {
    config: Arc<Configuration>,
}

impl AppsApi {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    /// `GET /apps`
    pub fn list_apps(&self, options: &ListOptions) -> Call<AppList> {
        APPS.list(&self.config, "list_apps", options)
    }

    /// `POST /apps`, answered with 201.
    pub fn create_app(
        &self,
        app: &App,
        options: &RequestOptions,
    ) -> Result<Call<App>, ApiError> {
        APPS.create(&self.config, "create_app", app, options)
    }

    /// `GET /apps/{app-id}`
    pub fn get_app(&self, app_id: &str, options: &GetOptions) -> Result<Call<App>, ApiError> {
        APPS.get(&self.config, "get_app", app_id, options)
    }

    /// `PATCH /apps/{app-id}`
    pub fn patch_app(
        &self,
        app_id: &str,
        patch: &[PatchOperation],
        options: &WriteOptions,
    ) -> Result<Call<App>, ApiError> {
        APPS.patch(&self.config, "patch_app", app_id, patch, options)
    }

    /// `PUT /apps/{app-id}`
    pub fn replace_app(
        &self,
        app_id: &str,
        app: &App,
        options: &WriteOptions,
    ) -> Result<Call<App>, ApiError> {
        APPS.replace(&self.config, "replace_app", app_id, app, options)
    }

    /// `DELETE /apps/{app-id}`, answered with 204.
    pub fn delete_app(&self, app_id: &str, options: &WriteOptions) -> Result<Call<()>, ApiError> {
        APPS.delete(&self.config, "delete_app", app_id, options)
    }

    /// `GET /apps/{app-id}/features`
    pub fn list_app_features(
        &self,
        app_id: &str,
        options: &ListOptions,
    ) -> Result<Call<FeatureList>, ApiError> {
        APPS.list_related(
            &self.config,
            "list_app_features",
            "/apps/{app-id}/features",
            app_id,
            options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLIENT_NAME, SDK_VERSION};
    use crate::http::HttpMethod;

    fn api() -> AppsApi {
        AppsApi::new(Arc::new(
            Configuration::new("https://iam.example.com")
                .with_app("portal", "3.2.1")
                .with_machine_name("ci-runner"),
        ))
    }

    #[test]
    fn list_app_features_targets_nested_path() {
        let call = api()
            .list_app_features("app 1", &ListOptions::default())
            .unwrap();
        assert_eq!(call.request().url, "https://iam.example.com/apps/app%201/features");
    }

    #[test]
    fn client_header_identifies_app_and_sdk() {
        let call = api().list_apps(&ListOptions::default());
        assert_eq!(
            call.request().header("X-Avalara-Client").unwrap(),
            format!("portal; 3.2.1; {CLIENT_NAME}; {SDK_VERSION}; ci-runner")
        );
    }

    #[test]
    fn replace_sends_app_type_as_type() {
        let app = App {
            app_type: Some("web".to_string()),
            ..App::new("Portal")
        };
        let call = api()
            .replace_app("app-1", &app, &WriteOptions::if_match("\"7\""))
            .unwrap();
        let body: serde_json::Value =
            serde_json::from_str(call.request().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["type"], "web");
        assert_eq!(call.request().header("If-Match"), Some("\"7\""));
    }

    #[test]
    fn item_operations_reject_empty_id() {
        let api = api();
        let write = WriteOptions::default();
        let errors = [
            api.get_app("", &GetOptions::default()).err(),
            api.patch_app("", &[], &write).err(),
            api.replace_app(" ", &App::new("Portal"), &write).err(),
            api.delete_app("", &write).err(),
            api.list_app_features("", &ListOptions::default()).err(),
        ];
        for err in errors {
            assert!(matches!(
                err,
                Some(ApiError::MissingParameter {
                    parameter: "app-id",
                    ..
                })
            ));
        }
    }

    #[test]
    fn item_operations_substitute_id() {
        let api = api();
        let write = WriteOptions::default();
        let requests = [
            api.get_app("app-1", &GetOptions::default()).unwrap().into_request(),
            api.patch_app("app-1", &[], &write).unwrap().into_request(),
            api.replace_app("app-1", &App::new("Portal"), &write).unwrap().into_request(),
            api.delete_app("app-1", &write).unwrap().into_request(),
        ];
        let methods = [
            HttpMethod::Get,
            HttpMethod::Patch,
            HttpMethod::Put,
            HttpMethod::Delete,
        ];
        for (req, method) in requests.iter().zip(methods) {
            assert_eq!(req.method, method);
            assert_eq!(req.url, "https://iam.example.com/apps/app-1");
        }
    }
}

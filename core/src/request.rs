//! Request construction shared by every operation.
//!
//! # Design
//! `RequestBuilder` turns an operation's path template and parameters into an
//! `HttpRequest`. Required path parameters are validated as they are
//! substituted, so a missing identifier fails before anything is sent.
//! Optional query values and headers are only appended when present.

use serde::Serialize;

use crate::config::Configuration;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::params::{GetOptions, ListOptions, RequestOptions, WriteOptions};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_TEXT: &str = "text/plain";

pub(crate) struct RequestBuilder<'a> {
    config: &'a Configuration,
    operation: &'static str,
    method: HttpMethod,
    path: String,
    query: Vec<(&'static str, String)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(
        config: &'a Configuration,
        operation: &'static str,
        method: HttpMethod,
        template: &'static str,
    ) -> Self {
        Self {
            config,
            operation,
            method,
            path: template.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Substitute `{name}` in the path template with the percent-encoded value.
    pub(crate) fn path_param(mut self, name: &'static str, value: &str) -> Result<Self, ApiError> {
        if value.trim().is_empty() {
            return Err(ApiError::MissingParameter {
                operation: self.operation,
                parameter: name,
            });
        }
        let placeholder = format!("{{{name}}}");
        self.path = self.path.replace(&placeholder, &urlencoding::encode(value));
        Ok(self)
    }

    pub(crate) fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value.map(|v| v.to_string()).filter(|v| !v.trim().is_empty()) {
            self.query.push((name, value));
        }
        self
    }

    pub(crate) fn header(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub(crate) fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub(crate) fn request_options(self, options: &RequestOptions) -> Self {
        self.header("avalara-version", options.avalara_version.as_deref())
            .header("X-Correlation-Id", options.correlation_id.as_deref())
    }

    pub(crate) fn list_options(self, options: &ListOptions) -> Self {
        self.query("$filter", options.filter.as_deref())
            .query("$top", options.top)
            .query("$skip", options.skip)
            .query("$orderBy", options.order_by.as_deref())
            .query("count", options.count)
            .query("countOnly", options.count_only)
            .request_options(&options.request)
    }

    pub(crate) fn get_options(self, options: &GetOptions) -> Self {
        self.header("If-None-Match", options.if_none_match.as_deref())
            .request_options(&options.request)
    }

    pub(crate) fn write_options(self, options: &WriteOptions) -> Self {
        self.header("If-Match", options.if_match.as_deref())
            .request_options(&options.request)
    }

    pub(crate) fn build(self) -> HttpRequest {
        let mut url = format!("{}{}", self.config.base_url, self.path);
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        let content_type = if self.body.is_some() {
            CONTENT_TYPE_JSON
        } else {
            CONTENT_TYPE_TEXT
        };
        let mut headers = vec![
            ("Accept".to_string(), CONTENT_TYPE_JSON.to_string()),
            ("Content-Type".to_string(), content_type.to_string()),
            ("X-Avalara-Client".to_string(), self.config.client_identifier()),
        ];
        if let Some(token) = self.config.access_token.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers.extend(self.headers);

        HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        }
    }
}

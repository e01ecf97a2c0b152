//! Client configuration.
//!
//! # Design
//! `Configuration` is an explicit value owned by the caller and handed to
//! `FoundationClient::new`; the client shares it read-only between resource
//! APIs. `from_env` reads the `FOUNDATION_*` variables for tools that are
//! configured through the environment.

use std::time::Duration;

use crate::error::ApiError;

/// Client name reported in the `X-Avalara-Client` header.
pub const CLIENT_NAME: &str = "RustRestClient";

/// Version of this SDK, reported in the `X-Avalara-Client` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Configuration {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request when set.
    pub access_token: Option<String>,
    pub app_name: String,
    pub app_version: String,
    pub machine_name: String,
    /// Global per-request timeout applied by the bundled transports.
    pub timeout: Duration,
    /// Log request and response bodies at `debug` level.
    pub debug: bool,
}

impl Configuration {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            app_name: "foundation-core".to_string(),
            app_version: SDK_VERSION.to_string(),
            machine_name: default_machine_name(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_app(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app_name = name.into();
        self.app_version = version.into();
        self
    }

    pub fn with_machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = machine_name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build a configuration from `FOUNDATION_*` environment variables.
    ///
    /// `FOUNDATION_BASE_URL` is required; everything else falls back to the
    /// defaults of [`Configuration::new`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("FOUNDATION_BASE_URL").ok_or_else(|| {
            ApiError::Configuration("FOUNDATION_BASE_URL is not set".to_string())
        })?;
        let mut config = Self::new(&base_url);

        config.access_token = get("FOUNDATION_ACCESS_TOKEN");
        if let Some(name) = get("FOUNDATION_APP_NAME") {
            config.app_name = name;
        }
        if let Some(version) = get("FOUNDATION_APP_VERSION") {
            config.app_version = version;
        }
        if let Some(machine) = get("FOUNDATION_MACHINE_NAME") {
            config.machine_name = machine;
        }
        if let Some(secs) = get("FOUNDATION_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Configuration(format!("FOUNDATION_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(debug) = get("FOUNDATION_DEBUG") {
            let debug = debug.trim().to_ascii_lowercase();
            config.debug = matches!(debug.as_str(), "1" | "true" | "yes");
        }
        Ok(config)
    }

    /// Reject configurations no request could be built from.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Configuration("base_url is empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::Configuration(format!(
                "base_url must be an http(s) URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Value of the `X-Avalara-Client` header:
    /// `{app-name}; {app-version}; {client-name}; {sdk-version}; {machine-name}`.
    pub fn client_identifier(&self) -> String {
        format!(
            "{}; {}; {}; {}; {}",
            self.app_name, self.app_version, CLIENT_NAME, SDK_VERSION, self.machine_name
        )
    }
}

fn default_machine_name() -> String {
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

//! Client SDK for the foundation identity and organization API.
//!
//! # Overview
//! Covers organizations, tenants, users, apps, features and grants. Each
//! operation builds a [`Call`]: the fully-formed HTTP request plus the
//! response type it decodes to. A `Call` can be dispatched through a blocking
//! [`Transport`], an [`AsyncTransport`], or executed by the caller and decoded
//! with [`Call::parse`].
//!
//! # Design
//! - `FoundationClient` holds only the shared `Configuration` (base URL,
//!   bearer token, client identity, timeout).
//! - Required path parameters are validated while the request is built, so a
//!   missing identifier never reaches the network.
//! - Any status outside 200–299 becomes `ApiError::Http`; 400 bodies are
//!   decoded into `VersionError` when possible.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! ```no_run
//! use foundation_core::{Configuration, FoundationClient, ListOptions, UreqTransport};
//!
//! # fn main() -> Result<(), foundation_core::ApiError> {
//! let config = Configuration::new("https://iam.example.com").with_access_token("token");
//! let transport = UreqTransport::new(&config);
//! let client = FoundationClient::new(config)?;
//!
//! let page = client
//!     .organizations()
//!     .list_organizations(&ListOptions::page(10, 0))
//!     .send(&transport)?;
//! println!("{} organizations", page.value.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod call;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod params;
mod request;
pub mod transport;

pub use api::{AppsApi, FeaturesApi, GrantsApi, OrganizationsApi, TenantsApi, UsersApi};
pub use call::Call;
pub use client::FoundationClient;
pub use config::Configuration;
pub use error::ApiError;
pub use http::{ApiResponse, HttpMethod, HttpRequest, HttpResponse};
pub use params::{GetOptions, ListOptions, RequestOptions, WriteOptions};
pub use transport::{AsyncTransport, ReqwestTransport, Transport, UreqTransport};

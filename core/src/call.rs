//! A built request paired with its declared response type.
//!
//! # Design
//! Every operation returns a `Call<T>`. The request is fully built up front,
//! so usage errors surface before any I/O, and the same value can then be
//! dispatched through a blocking `Transport`, an `AsyncTransport`, or handed
//! to the caller to execute by hand and fed back through [`Call::parse`].
//!
//! Decoding applies one rule for every operation: any status outside 200–299
//! is an `ApiError::Http` (with the `VersionError` payload attached for 400),
//! and any 2xx body is decoded as `T`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{ApiResponse, HttpRequest, HttpResponse};
use crate::models::VersionError;
use crate::transport::{AsyncTransport, Transport};

pub struct Call<T> {
    operation: &'static str,
    request: HttpRequest,
    log_bodies: bool,
    response: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Call<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("operation", &self.operation)
            .field("request", &self.request)
            .finish()
    }
}

impl<T: DeserializeOwned> Call<T> {
    pub(crate) fn new(operation: &'static str, request: HttpRequest, log_bodies: bool) -> Self {
        Self {
            operation,
            request,
            log_bodies,
            response: PhantomData,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    /// Decode a response obtained by executing [`Call::request`] by hand.
    pub fn parse(&self, response: HttpResponse) -> Result<ApiResponse<T>, ApiError> {
        debug!(
            operation = self.operation,
            status = response.status,
            "received response"
        );
        if self.log_bodies {
            debug!(operation = self.operation, body = %response.body, "response body");
        }
        decode(self.operation, response)
    }

    pub fn send<X>(self, transport: &X) -> Result<T, ApiError>
    where
        X: Transport + ?Sized,
    {
        self.send_with_info(transport).map(|r| r.data)
    }

    /// Blocking dispatch that keeps the status and headers (e.g. `ETag`).
    pub fn send_with_info<X>(self, transport: &X) -> Result<ApiResponse<T>, ApiError>
    where
        X: Transport + ?Sized,
    {
        self.log_dispatch();
        let response = transport
            .execute(&self.request)
            .inspect_err(|e| self.log_transport_failure(e))?;
        self.parse(response)
    }

    pub async fn send_async<X>(self, transport: &X) -> Result<T, ApiError>
    where
        X: AsyncTransport + ?Sized,
    {
        self.send_async_with_info(transport).await.map(|r| r.data)
    }

    pub async fn send_async_with_info<X>(self, transport: &X) -> Result<ApiResponse<T>, ApiError>
    where
        X: AsyncTransport + ?Sized,
    {
        self.log_dispatch();
        let response = transport
            .execute(&self.request)
            .await
            .inspect_err(|e| self.log_transport_failure(e))?;
        self.parse(response)
    }

    fn log_dispatch(&self) {
        debug!(
            operation = self.operation,
            method = %self.request.method,
            url = %self.request.url,
            "dispatching request"
        );
        if self.log_bodies {
            if let Some(body) = &self.request.body {
                debug!(operation = self.operation, body = %body, "request body");
            }
        }
    }

    fn log_transport_failure(&self, err: &ApiError) {
        warn!(operation = self.operation, url = %self.request.url, "transport failure: {err}");
    }
}

fn decode<T: DeserializeOwned>(
    operation: &'static str,
    response: HttpResponse,
) -> Result<ApiResponse<T>, ApiError> {
    if !response.is_success() {
        warn!(operation, status = response.status, "request failed");
        let version_error = if response.status == 400 {
            serde_json::from_str::<VersionError>(&response.body).ok()
        } else {
            None
        };
        return Err(ApiError::Http {
            status: response.status,
            headers: response.headers,
            body: response.body,
            version_error,
        });
    }

    // Empty bodies (204 No Content) decode as JSON null, which is what `()` expects.
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    let data = serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(ApiResponse {
        status: response.status,
        headers: response.headers,
        data,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::http::HttpMethod;
    use crate::models::Organization;

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/organizations/org-1".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("ETag".to_string(), "\"1\"".to_string())],
            body: body.to_string(),
        }
    }

    /// Replays a canned response and records what it was asked to send.
    struct Canned {
        response: Result<HttpResponse, String>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            self.response.clone().map_err(ApiError::Transport)
        }
    }

    #[test]
    fn success_decodes_declared_type() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let parsed = call
            .parse(response(200, r#"{"id":"org-1","displayName":"Acme"}"#))
            .unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.etag(), Some("\"1\""));
        assert_eq!(parsed.data.display_name, "Acme");
    }

    #[test]
    fn undeclared_2xx_still_decodes_success_type() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let parsed = call.parse(response(203, r#"{"displayName":"Acme"}"#)).unwrap();
        assert_eq!(parsed.status, 203);
    }

    #[test]
    fn bad_request_attaches_version_error() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let err = call
            .parse(response(
                400,
                r#"{"code":"UnsupportedVersion","message":"use 1.0","target":"avalara-version"}"#,
            ))
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        let version_error = err.version_error().unwrap();
        assert_eq!(version_error.code.as_deref(), Some("UnsupportedVersion"));
        assert_eq!(version_error.target.as_deref(), Some("avalara-version"));
    }

    #[test]
    fn bad_request_with_unparseable_body_keeps_raw_body() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let err = call.parse(response(400, "oops")).unwrap_err();
        match err {
            ApiError::Http {
                status,
                body,
                version_error,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(body, "oops");
                assert!(version_error.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn other_statuses_carry_status_headers_and_body() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let err = call.parse(response(404, "missing")).unwrap_err();
        assert!(err.is_not_found());
        match err {
            ApiError::Http { headers, body, .. } => {
                assert_eq!(body, "missing");
                assert_eq!(headers.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_modified_is_an_error() {
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let err = call.parse(response(304, "")).unwrap_err();
        assert_eq!(err.status(), Some(304));
    }

    #[test]
    fn empty_body_decodes_unit() {
        let call: Call<()> = Call::new("delete_organization", request(), false);
        let parsed = call.parse(response(204, "")).unwrap();
        assert_eq!(parsed.status, 204);
    }

    #[test]
    fn malformed_success_body_is_deserialization_error() {
        let call: Call<Organization> = Call::new("get_organization", request(), true);
        let err = call.parse(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn send_goes_through_transport() {
        let transport = Canned {
            response: Ok(response(200, r#"{"displayName":"Acme"}"#)),
            seen: RefCell::new(Vec::new()),
        };
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let org = call.send(&transport).unwrap();
        assert_eq!(org.display_name, "Acme");
        assert_eq!(transport.seen.borrow()[0], request());
    }

    #[test]
    fn transport_failure_has_no_response_detail() {
        let transport = Canned {
            response: Err("connection refused".to_string()),
            seen: RefCell::new(Vec::new()),
        };
        let call: Call<Organization> = Call::new("get_organization", request(), false);
        let err = call.send(&transport).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}

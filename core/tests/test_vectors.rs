//! Verify request building and response decoding against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector describes operation inputs, the expected request, a simulated
//! response, and either the expected decoded result or the expected error.
//! Results are compared as parsed JSON, not raw strings, so field ordering
//! does not matter.

use foundation_core::models::Organization;
use foundation_core::{
    ApiError, Call, Configuration, FoundationClient, GetOptions, HttpMethod, HttpResponse,
    ListOptions, RequestOptions, WriteOptions,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> FoundationClient {
    FoundationClient::new(Configuration::new(BASE_URL)).unwrap()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn text(input: &Value, key: &str) -> Option<String> {
    input.get(key).and_then(Value::as_str).map(str::to_string)
}

fn request_options(input: &Value) -> RequestOptions {
    RequestOptions {
        avalara_version: text(input, "avalara_version"),
        correlation_id: text(input, "correlation_id"),
    }
}

fn list_options(input: &Value) -> ListOptions {
    ListOptions {
        filter: text(input, "filter"),
        top: input.get("top").and_then(Value::as_u64).map(|v| v as u32),
        skip: input.get("skip").and_then(Value::as_u64).map(|v| v as u32),
        order_by: text(input, "order_by"),
        count: input.get("count").and_then(Value::as_bool),
        count_only: input.get("count_only").and_then(Value::as_bool),
        request: request_options(input),
    }
}

/// Check one case against an already-built call.
fn check<T>(name: &str, case: &Value, call: Call<T>)
where
    T: DeserializeOwned + Serialize,
{
    let expected_req = &case["expected_request"];
    let req = call.request();

    let method = parse_method(expected_req["method"].as_str().unwrap());
    let path = expected_req["path"].as_str().unwrap();
    assert_eq!(req.method, method, "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{path}"), "{name}: url");

    for header in expected_req["headers"].as_array().unwrap() {
        let pair = header.as_array().unwrap();
        let (key, value) = (pair[0].as_str().unwrap(), pair[1].as_str().unwrap());
        assert_eq!(req.header(key), Some(value), "{name}: header {key}");
    }
    for key in expected_req["absent_headers"].as_array().unwrap() {
        let key = key.as_str().unwrap();
        assert!(req.header(key).is_none(), "{name}: header {key} should be absent");
    }
    match expected_req.get("body") {
        Some(expected_body) => {
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }

    let sim = &case["simulated_response"];
    let response = HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    };
    let result = call.parse(response);

    if let Some(expected_error) = case.get("expected_error") {
        let err = result.err().unwrap_or_else(|| panic!("{name}: expected an error"));
        assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http error");
        assert_eq!(
            err.status(),
            expected_error["status"].as_u64().map(|s| s as u16),
            "{name}: status"
        );
        match expected_error.get("version_error") {
            Some(expected) => {
                let actual = serde_json::to_value(err.version_error().unwrap()).unwrap();
                assert_eq!(&actual, expected, "{name}: version error");
            }
            None => assert!(err.version_error().is_none(), "{name}: unexpected version error"),
        }
    } else {
        let parsed = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(
            serde_json::to_value(&parsed.data).unwrap(),
            serde_json::to_value(&expected).unwrap(),
            "{name}: parsed result"
        );
    }
}

#[test]
fn organization_test_vectors() {
    let raw = include_str!("../../test-vectors/organizations.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let api = client().organizations();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];

        match case["operation"].as_str().unwrap() {
            "list_organizations" => check(name, case, api.list_organizations(&list_options(input))),
            "get_organization" => {
                let options = GetOptions {
                    if_none_match: text(input, "if_none_match"),
                    request: request_options(input),
                };
                let call = api
                    .get_organization(input["id"].as_str().unwrap(), &options)
                    .unwrap();
                check(name, case, call);
            }
            "create_organization" => {
                let body: Organization = serde_json::from_value(input["body"].clone()).unwrap();
                let call = api
                    .create_organization(&body, &request_options(input))
                    .unwrap();
                check(name, case, call);
            }
            "delete_organization" => {
                let options = WriteOptions {
                    if_match: text(input, "if_match"),
                    request: request_options(input),
                };
                let call = api
                    .delete_organization(input["id"].as_str().unwrap(), &options)
                    .unwrap();
                check(name, case, call);
            }
            other => panic!("{name}: unknown operation {other}"),
        }
    }
}

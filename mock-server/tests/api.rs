use std::convert::Infallible;

use axum::http::{self, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::{Service, ServiceExt};

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send<S>(app: &mut S, request: Request<String>) -> Response
where
    S: Service<Request<String>, Response = Response, Error = Infallible>,
{
    ServiceExt::ready(app).await.unwrap().call(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_organizations_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/organizations"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"value": []}));
}

#[tokio::test]
async fn count_only_returns_just_the_count() {
    let resp = app()
        .oneshot(empty_request("GET", "/tenants?countOnly=true"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"@recordSetCount": 0}));
}

#[tokio::test]
async fn unsupported_filter_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/users?$filter=userName%20gt%20%27a%27"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- version header ---

#[tokio::test]
async fn unsupported_version_returns_version_error() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/features")
                .header("avalara-version", "9.9")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "UnsupportedVersion");
    assert_eq!(body["target"], "avalara-version");
}

// --- create ---

#[tokio::test]
async fn create_organization_returns_201_with_meta() {
    let resp = app()
        .oneshot(json_request("POST", "/organizations", r#"{"displayName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()[http::header::ETAG], "\"1\"");
    let org = body_json(resp).await;
    assert_eq!(org["displayName"], "Acme");
    assert!(org["id"].is_string());
    assert_eq!(org["meta"]["resourceType"], "Organization");
    assert_eq!(org["meta"]["version"], "1");
}

#[tokio::test]
async fn create_user_without_user_name_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"displayName":"nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get / update / delete on missing ids ---

#[tokio::test]
async fn get_missing_grant_returns_404() {
    let resp = app()
        .oneshot(empty_request("GET", "/grants/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_missing_app_returns_404() {
    let resp = app()
        .oneshot(json_request("PUT", "/apps/does-not-exist", r#"{"displayName":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn children_of_missing_parent_return_404() {
    let resp = app()
        .oneshot(empty_request("GET", "/features/does-not-exist/grants"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn organization_lifecycle_with_conditional_requests() {
    let mut app = app().into_service();

    // create
    let resp = send(
        &mut app,
        json_request("POST", "/organizations", r#"{"displayName":"Acme"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // conditional get with the current etag
    let resp = send(
        &mut app,
        Request::builder()
            .uri(format!("/organizations/{id}"))
            .header(http::header::IF_NONE_MATCH, "\"1\"")
            .body(String::new())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);

    // patch with a stale etag
    let patch = r#"[{"op":"replace","path":"/displayName","value":"Acme Ltd"}]"#;
    let mut request = json_request("PATCH", &format!("/organizations/{id}"), patch);
    request
        .headers_mut()
        .insert(http::header::IF_MATCH, "\"9\"".parse().unwrap());
    let resp = send(&mut app, request).await;
    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);

    // patch with the current etag
    let mut request = json_request("PATCH", &format!("/organizations/{id}"), patch);
    request
        .headers_mut()
        .insert(http::header::IF_MATCH, "\"1\"".parse().unwrap());
    let resp = send(&mut app, request).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::ETAG], "\"2\"");
    let patched = body_json(resp).await;
    assert_eq!(patched["displayName"], "Acme Ltd");
    assert_eq!(patched["id"], id.as_str());

    // tenant under the organization
    let tenant = format!(r#"{{"displayName":"Acme EU","organization":{{"id":"{id}"}}}}"#);
    let resp = send(&mut app, json_request("POST", "/tenants", &tenant)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(
        &mut app,
        empty_request("GET", &format!("/organizations/{id}/tenants?count=true")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let tenants = body_json(resp).await;
    assert_eq!(tenants["@recordSetCount"], 1);
    assert_eq!(tenants["value"][0]["displayName"], "Acme EU");

    // delete
    let resp = send(&mut app, empty_request("DELETE", &format!("/organizations/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete
    let resp = send(&mut app, empty_request("GET", &format!("/organizations/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_orders_and_pages() {
    let mut app = app().into_service();
    for name in ["Charlie", "Alpha", "Bravo"] {
        let body = format!(r#"{{"displayName":"{name}"}}"#);
        let resp = send(&mut app, json_request("POST", "/features", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(
        &mut app,
        empty_request("GET", "/features?$orderBy=displayName%20desc&$skip=1&$top=1"),
    )
    .await;
    let page = body_json(resp).await;
    assert_eq!(page["value"].as_array().unwrap().len(), 1);
    assert_eq!(page["value"][0]["displayName"], "Bravo");
    assert!(page.get("@recordSetCount").is_none());

    let resp = send(
        &mut app,
        empty_request("GET", "/features?$filter=displayName%20eq%20%27Alpha%27&count=true"),
    )
    .await;
    let page = body_json(resp).await;
    assert_eq!(page["@recordSetCount"], 1);
    assert_eq!(page["value"][0]["displayName"], "Alpha");
}

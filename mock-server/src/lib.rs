//! In-memory implementation of the foundation API.
//!
//! Resources are stored as raw JSON objects so the server stays independent
//! of the client's DTOs. Each collection keeps insertion order for listing.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

/// The only `avalara-version` this server accepts.
pub const SUPPORTED_VERSION: &str = "1.0";

/// A top-level resource collection.
#[derive(Clone, Copy, Debug)]
pub struct Collection {
    pub name: &'static str,
    pub resource_type: &'static str,
    /// Field every resource of this type must carry as a non-empty string.
    pub required: &'static str,
}

pub const ORGANIZATIONS: Collection = Collection {
    name: "organizations",
    resource_type: "Organization",
    required: "displayName",
};
pub const TENANTS: Collection = Collection {
    name: "tenants",
    resource_type: "Tenant",
    required: "displayName",
};
pub const USERS: Collection = Collection {
    name: "users",
    resource_type: "User",
    required: "userName",
};
pub const APPS: Collection = Collection {
    name: "apps",
    resource_type: "App",
    required: "displayName",
};
pub const FEATURES: Collection = Collection {
    name: "features",
    resource_type: "Feature",
    required: "displayName",
};
pub const GRANTS: Collection = Collection {
    name: "grants",
    resource_type: "Grant",
    required: "displayName",
};

/// A child listing such as `/organizations/{id}/tenants`: children whose
/// `link` reference points at the parent.
#[derive(Clone, Copy, Debug)]
struct Related {
    parent: Collection,
    child: Collection,
    link: &'static str,
}

const RELATED: [Related; 5] = [
    Related {
        parent: ORGANIZATIONS,
        child: APPS,
        link: "organization",
    },
    Related {
        parent: ORGANIZATIONS,
        child: TENANTS,
        link: "organization",
    },
    Related {
        parent: ORGANIZATIONS,
        child: USERS,
        link: "organization",
    },
    Related {
        parent: FEATURES,
        child: GRANTS,
        link: "feature",
    },
    Related {
        parent: APPS,
        child: FEATURES,
        link: "app",
    },
];

pub type Db = Arc<RwLock<HashMap<&'static str, Vec<Value>>>>;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "$filter")]
    pub filter: Option<String>,
    #[serde(rename = "$top")]
    pub top: Option<usize>,
    #[serde(rename = "$skip")]
    pub skip: Option<usize>,
    #[serde(rename = "$orderBy")]
    pub order_by: Option<String>,
    pub count: Option<bool>,
    #[serde(rename = "countOnly")]
    pub count_only: Option<bool>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let mut router = Router::new();
    for collection in [ORGANIZATIONS, TENANTS, USERS, APPS, FEATURES, GRANTS] {
        router = resource_routes(router, collection);
    }
    for related in RELATED {
        router = router.route(
            &format!("/{}/{{id}}/{}", related.parent.name, related.child.name),
            get(
                move |State(db): State<Db>,
                      Path(id): Path<String>,
                      headers: HeaderMap,
                      Query(query): Query<ListQuery>| {
                    list_related(db, related, id, headers, query)
                },
            ),
        );
    }
    router.with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn resource_routes(router: Router<Db>, c: Collection) -> Router<Db> {
    router
        .route(
            &format!("/{}", c.name),
            get(
                move |State(db): State<Db>, headers: HeaderMap, Query(query): Query<ListQuery>| {
                    list(db, c, headers, query)
                },
            )
            .post(
                move |State(db): State<Db>, headers: HeaderMap, Json(body): Json<Value>| {
                    create(db, c, headers, body)
                },
            ),
        )
        .route(
            &format!("/{}/{{id}}", c.name),
            get(
                move |State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap| {
                    fetch(db, c, id, headers)
                },
            )
            .patch(
                move |State(db): State<Db>,
                      Path(id): Path<String>,
                      headers: HeaderMap,
                      Json(ops): Json<Vec<PatchOp>>| { patch(db, c, id, headers, ops) },
            )
            .put(
                move |State(db): State<Db>,
                      Path(id): Path<String>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| { replace(db, c, id, headers, body) },
            )
            .delete(
                move |State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap| {
                    remove(db, c, id, headers)
                },
            ),
        )
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum MockError {
    UnsupportedVersion(String),
    Invalid(String),
    NotFound,
    PreconditionFailed,
    NotModified(String),
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        match self {
            MockError::UnsupportedVersion(version) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "code": "UnsupportedVersion",
                    "message": format!(
                        "avalara-version {version} is not supported; use {SUPPORTED_VERSION}"
                    ),
                    "target": "avalara-version",
                })),
            )
                .into_response(),
            MockError::Invalid(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": "InvalidRequest", "message": message })),
            )
                .into_response(),
            MockError::NotFound => StatusCode::NOT_FOUND.into_response(),
            MockError::PreconditionFailed => StatusCode::PRECONDITION_FAILED.into_response(),
            MockError::NotModified(etag) => {
                let mut response = StatusCode::NOT_MODIFIED.into_response();
                if let Ok(value) = HeaderValue::from_str(&etag) {
                    response.headers_mut().insert(header::ETAG, value);
                }
                response
            }
        }
    }
}

type Handled = Result<Response, MockError>;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn list(db: Db, c: Collection, headers: HeaderMap, query: ListQuery) -> Handled {
    check_version(&headers)?;
    let store = db.read().await;
    let items = store.get(c.name).cloned().unwrap_or_default();
    let body = page(items, &query)?;
    Ok(Json(body).into_response())
}

async fn list_related(
    db: Db,
    related: Related,
    parent_id: String,
    headers: HeaderMap,
    query: ListQuery,
) -> Handled {
    check_version(&headers)?;
    let store = db.read().await;
    let parent_exists = store
        .get(related.parent.name)
        .is_some_and(|items| items.iter().any(|item| item["id"] == parent_id.as_str()));
    if !parent_exists {
        return Err(MockError::NotFound);
    }
    let children = store
        .get(related.child.name)
        .map(|items| {
            items
                .iter()
                .filter(|item| item[related.link]["id"] == parent_id.as_str())
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let body = page(children, &query)?;
    Ok(Json(body).into_response())
}

async fn create(db: Db, c: Collection, headers: HeaderMap, body: Value) -> Handled {
    check_version(&headers)?;
    let mut resource = validate_body(c, body)?;
    let id = Uuid::new_v4().to_string();
    let now = now();
    resource.insert("id".to_string(), json!(id));
    resource.insert(
        "meta".to_string(),
        json!({
            "location": format!("/{}/{id}", c.name),
            "resourceType": c.resource_type,
            "version": "1",
            "created": now,
            "lastModified": now,
        }),
    );
    let resource = Value::Object(resource);
    debug!(collection = c.name, %id, "created resource");
    db.write()
        .await
        .entry(c.name)
        .or_default()
        .push(resource.clone());
    Ok(with_etag(StatusCode::CREATED, resource))
}

async fn fetch(db: Db, c: Collection, id: String, headers: HeaderMap) -> Handled {
    check_version(&headers)?;
    let store = db.read().await;
    let resource = find(&store, c, &id).ok_or(MockError::NotFound)?;
    let etag = etag_of(resource);
    if header_str(&headers, header::IF_NONE_MATCH.as_str()) == Some(etag.as_str()) {
        return Err(MockError::NotModified(etag));
    }
    Ok(with_etag(StatusCode::OK, resource.clone()))
}

#[derive(Debug, Deserialize)]
struct PatchOp {
    op: String,
    path: String,
    #[serde(default)]
    value: Option<Value>,
}

async fn patch(
    db: Db,
    c: Collection,
    id: String,
    headers: HeaderMap,
    ops: Vec<PatchOp>,
) -> Handled {
    check_version(&headers)?;
    let mut store = db.write().await;
    let resource = find_mut(&mut store, c, &id).ok_or(MockError::NotFound)?;
    check_if_match(&headers, resource)?;

    let mut patched = resource.clone();
    for op in &ops {
        apply(&mut patched, op)?;
    }
    // Identity and bookkeeping are server-owned.
    patched["id"] = resource["id"].clone();
    patched["meta"] = resource["meta"].clone();
    let patched = validate_body(c, patched)?;
    *resource = Value::Object(patched);
    bump_version(resource);
    Ok(with_etag(StatusCode::OK, resource.clone()))
}

async fn replace(db: Db, c: Collection, id: String, headers: HeaderMap, body: Value) -> Handled {
    check_version(&headers)?;
    let mut replacement = validate_body(c, body)?;
    let mut store = db.write().await;
    let resource = find_mut(&mut store, c, &id).ok_or(MockError::NotFound)?;
    check_if_match(&headers, resource)?;

    replacement.insert("id".to_string(), resource["id"].clone());
    replacement.insert("meta".to_string(), resource["meta"].clone());
    *resource = Value::Object(replacement);
    bump_version(resource);
    Ok(with_etag(StatusCode::OK, resource.clone()))
}

async fn remove(db: Db, c: Collection, id: String, headers: HeaderMap) -> Handled {
    check_version(&headers)?;
    let mut store = db.write().await;
    let items = store.get_mut(c.name).ok_or(MockError::NotFound)?;
    let index = items
        .iter()
        .position(|item| item["id"] == id.as_str())
        .ok_or(MockError::NotFound)?;
    check_if_match(&headers, &items[index])?;
    items.remove(index);
    debug!(collection = c.name, %id, "deleted resource");
    Ok(StatusCode::NO_CONTENT.into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn check_version(headers: &HeaderMap) -> Result<(), MockError> {
    match header_str(headers, "avalara-version") {
        Some(version) if version != SUPPORTED_VERSION => {
            Err(MockError::UnsupportedVersion(version.to_string()))
        }
        _ => Ok(()),
    }
}

fn check_if_match(headers: &HeaderMap, resource: &Value) -> Result<(), MockError> {
    match header_str(headers, header::IF_MATCH.as_str()) {
        Some("*") | None => Ok(()),
        Some(etag) if etag == etag_of(resource) => Ok(()),
        Some(_) => Err(MockError::PreconditionFailed),
    }
}

fn validate_body(c: Collection, body: Value) -> Result<Map<String, Value>, MockError> {
    let Value::Object(map) = body else {
        return Err(MockError::Invalid("body must be a JSON object".to_string()));
    };
    match map.get(c.required) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(map),
        _ => Err(MockError::Invalid(format!("`{}` is required", c.required))),
    }
}

fn find<'a>(
    store: &'a HashMap<&'static str, Vec<Value>>,
    c: Collection,
    id: &str,
) -> Option<&'a Value> {
    store.get(c.name)?.iter().find(|item| item["id"] == id)
}

fn find_mut<'a>(
    store: &'a mut HashMap<&'static str, Vec<Value>>,
    c: Collection,
    id: &str,
) -> Option<&'a mut Value> {
    store.get_mut(c.name)?.iter_mut().find(|item| item["id"] == id)
}

fn etag_of(resource: &Value) -> String {
    format!("\"{}\"", resource["meta"]["version"].as_str().unwrap_or("0"))
}

fn bump_version(resource: &mut Value) {
    let next = resource["meta"]["version"]
        .as_str()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
        + 1;
    resource["meta"]["version"] = json!(next.to_string());
    resource["meta"]["lastModified"] = json!(now());
}

fn with_etag(status: StatusCode, resource: Value) -> Response {
    let etag = etag_of(&resource);
    let mut response = (status, Json(resource)).into_response();
    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}

/// Apply filter, ordering and paging to a collection snapshot and build the
/// list envelope.
fn page(mut items: Vec<Value>, query: &ListQuery) -> Result<Value, MockError> {
    if let Some(filter) = query.filter.as_deref().filter(|f| !f.trim().is_empty()) {
        let (field, expected) = parse_filter(filter)?;
        items.retain(|item| item[field.as_str()].as_str() == Some(expected.as_str()));
    }
    if let Some(order_by) = query.order_by.as_deref().filter(|o| !o.trim().is_empty()) {
        let mut parts = order_by.split_whitespace();
        let field = parts.next().unwrap_or_default().to_string();
        let descending = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => {
                return Err(MockError::Invalid(format!("unsupported sort direction: {other}")))
            }
        };
        items.sort_by(|a, b| sort_key(&a[field.as_str()]).cmp(&sort_key(&b[field.as_str()])));
        if descending {
            items.reverse();
        }
    }

    let total = items.len();
    let mut body = Map::new();
    if query.count.unwrap_or(false) || query.count_only.unwrap_or(false) {
        body.insert("@recordSetCount".to_string(), json!(total));
    }
    if !query.count_only.unwrap_or(false) {
        let skip = query.skip.unwrap_or(0);
        let top = query.top.unwrap_or(usize::MAX);
        let value: Vec<Value> = items.into_iter().skip(skip).take(top).collect();
        body.insert("value".to_string(), Value::Array(value));
    }
    Ok(Value::Object(body))
}

fn sort_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Supports the single form `<field> eq '<value>'`.
fn parse_filter(filter: &str) -> Result<(String, String), MockError> {
    let invalid = || MockError::Invalid(format!("unsupported $filter: {filter}"));
    let (field, rest) = filter.trim().split_once(" eq ").ok_or_else(invalid)?;
    let value = rest
        .trim()
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .ok_or_else(invalid)?;
    Ok((field.trim().to_string(), value.replace("''", "'")))
}

fn apply(target: &mut Value, op: &PatchOp) -> Result<(), MockError> {
    let invalid = |msg: &str| MockError::Invalid(format!("{msg}: {}", op.path));
    let (parent_path, token) = op
        .path
        .rsplit_once('/')
        .ok_or_else(|| invalid("path must be a JSON pointer"))?;
    let token = token.replace("~1", "/").replace("~0", "~");
    let parent = target
        .pointer_mut(parent_path)
        .ok_or_else(|| invalid("path does not exist"))?;

    match op.op.as_str() {
        "add" | "replace" => {
            let value = op.value.clone().ok_or_else(|| invalid("missing value"))?;
            match parent {
                Value::Object(map) => {
                    if op.op == "replace" && !map.contains_key(&token) {
                        return Err(invalid("path does not exist"));
                    }
                    map.insert(token, value);
                }
                Value::Array(items) if token == "-" => items.push(value),
                Value::Array(items) => {
                    let index: usize = token.parse().map_err(|_| invalid("bad array index"))?;
                    if op.op == "replace" && index < items.len() {
                        items[index] = value;
                    } else if op.op == "add" && index <= items.len() {
                        items.insert(index, value);
                    } else {
                        return Err(invalid("array index out of range"));
                    }
                }
                _ => return Err(invalid("path does not exist")),
            }
        }
        "remove" => match parent {
            Value::Object(map) => {
                map.remove(&token).ok_or_else(|| invalid("path does not exist"))?;
            }
            Value::Array(items) => {
                let index: usize = token.parse().map_err(|_| invalid("bad array index"))?;
                if index >= items.len() {
                    return Err(invalid("array index out of range"));
                }
                items.remove(index);
            }
            _ => return Err(invalid("path does not exist")),
        },
        other => return Err(MockError::Invalid(format!("unsupported patch op: {other}"))),
    }
    Ok(())
}

//! In-process stand-in for json-server's `/wishes` collection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct ServerState {
    wishes: Vec<Map<String, Value>>,
    next_id: u64,
    fail_deletes: bool,
    requests: Vec<CapturedRequest>,
}

type Shared = Arc<Mutex<ServerState>>;

/// Mock json-server for testing the HTTP store.
pub struct MockJsonServer {
    pub addr: SocketAddr,
    state: Shared,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockJsonServer {
    /// Start a new server on an ephemeral port.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(ServerState {
            next_id: 1,
            ..Default::default()
        }));

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/wishes", get(list_wishes).post(create_wish))
            .route("/wishes/{id}", get(get_wish).patch(patch_wish).delete(delete_wish))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Insert a record directly, bypassing the HTTP surface.
    pub async fn seed(&self, title: &str, price: f64, created_at: &str) -> String {
        let mut state = self.state.lock().await;
        let id = state.next_id.to_string();
        state.next_id += 1;
        let record = json!({
            "id": id,
            "title": title,
            "description": format!("{} description", title),
            "imageUrl": format!("https://example.com/{}.jpg", id),
            "priority": "medium",
            "price": price,
            "completed": false,
            "createdAt": created_at,
        });
        if let Value::Object(map) = record {
            state.wishes.push(map);
        }
        id
    }

    /// Make every DELETE answer 500.
    pub async fn fail_deletes(&self, fail: bool) {
        self.state.lock().await.fail_deletes = fail;
    }

    pub async fn record(&self, id: &str) -> Option<Value> {
        let state = self.state.lock().await;
        state
            .wishes
            .iter()
            .find(|w| w.get("id").and_then(Value::as_str) == Some(id))
            .cloned()
            .map(Value::Object)
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.requests.clone()
    }
}

impl Drop for MockJsonServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn capture(
    state: &mut ServerState,
    method: &str,
    path: String,
    query: HashMap<String, String>,
    body: Option<Value>,
) {
    state.requests.push(CapturedRequest {
        method: method.to_string(),
        path,
        query,
        body,
    });
}

fn compare(field: &str, a: &Map<String, Value>, b: &Map<String, Value>) -> std::cmp::Ordering {
    match (a.get(field), b.get(field)) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or_default()
            .total_cmp(&y.as_f64().unwrap_or_default()),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => std::cmp::Ordering::Equal,
    }
}

async fn list_wishes(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut state = state.lock().await;
    capture(&mut state, "GET", "/wishes".to_string(), params.clone(), None);

    let mut wishes = state.wishes.clone();
    if let Some(sort) = params.get("_sort") {
        let (field, descending) = match sort.strip_prefix('-') {
            Some(field) => (field, true),
            None => (sort.as_str(), false),
        };
        wishes.sort_by(|a, b| compare(field, a, b));
        if descending {
            wishes.reverse();
        }
    }

    let page: usize = params.get("_page").and_then(|p| p.parse().ok()).unwrap_or(1).max(1);
    let per_page: usize = params
        .get("_per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10)
        .max(1);
    let total = wishes.len();
    let pages = total.div_ceil(per_page);
    let data: Vec<Value> = wishes
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .map(Value::Object)
        .collect();

    let next = if page < pages { json!(page + 1) } else { Value::Null };
    let prev = if page > 1 { json!(page - 1) } else { Value::Null };

    Json(json!({
        "first": 1,
        "prev": prev,
        "next": next,
        "last": pages.max(1),
        "pages": pages,
        "items": total,
        "data": data,
    }))
}

async fn create_wish(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().await;
    capture(&mut state, "POST", "/wishes".to_string(), HashMap::new(), Some(body.clone()));

    let mut record = match body {
        Value::Object(map) => map,
        _ => return (StatusCode::BAD_REQUEST, Json(json!({"error": "expected object"}))),
    };
    let id = format!("w{}", state.next_id);
    state.next_id += 1;
    record.insert("id".to_string(), Value::String(id));
    state.wishes.push(record.clone());
    (StatusCode::CREATED, Json(Value::Object(record)))
}

async fn get_wish(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let state = state.lock().await;
    state
        .wishes
        .iter()
        .find(|w| w.get("id").and_then(Value::as_str) == Some(id.as_str()))
        .cloned()
        .map(|w| Json(Value::Object(w)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn patch_wish(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().await;
    capture(&mut state, "PATCH", format!("/wishes/{}", id), HashMap::new(), Some(body.clone()));

    let record = state
        .wishes
        .iter_mut()
        .find(|w| w.get("id").and_then(Value::as_str) == Some(id.as_str()))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Value::Object(fields) = body {
        for (key, value) in fields {
            record.insert(key, value);
        }
    }
    Ok(Json(Value::Object(record.clone())))
}

async fn delete_wish(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().await;
    capture(&mut state, "DELETE", format!("/wishes/{}", id), HashMap::new(), None);

    if state.fail_deletes {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let position = state
        .wishes
        .iter()
        .position(|w| w.get("id").and_then(Value::as_str) == Some(id.as_str()))
        .ok_or(StatusCode::NOT_FOUND)?;
    let removed = state.wishes.remove(position);
    Ok(Json(Value::Object(removed)))
}

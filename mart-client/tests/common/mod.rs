//! In-process stand-in for the Etimad Mart backend

#![allow(dead_code)]

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use mart_client::{ClientConfig, MartClient};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "tok-admin-1";
pub const PASSWORD: &str = "secret123";

#[derive(Default)]
pub struct MockState {
    pub products: Vec<Value>,
    /// (method + path, body) of every write the backend accepted
    pub writes: Vec<(String, Value)>,
    pub low_stock_calls: usize,
    /// Answer 401 to every authenticated route
    pub reject_tokens: bool,
    /// Canned GET bodies keyed by path below `/api`, e.g. `sellers/leaderboard`
    pub fixtures: HashMap<String, Value>,
    /// `GET /path?query` of every fixture read
    pub reads: Vec<String>,
}

#[derive(Clone)]
pub struct MockBackend {
    pub state: Arc<Mutex<MockState>>,
    pub base_url: String,
}

impl MockBackend {
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn set_stock(&self, id: &str, stock: i64) {
        let mut state = self.state.lock().unwrap();
        if let Some(p) = state.products.iter_mut().find(|p| p["_id"] == id) {
            p["stock"] = json!(stock);
        }
    }

    pub fn reject_tokens(&self, reject: bool) {
        self.state.lock().unwrap().reject_tokens = reject;
    }

    pub fn seed(&self, path: &str, body: Value) {
        self.state
            .lock()
            .unwrap()
            .fixtures
            .insert(path.to_string(), body);
    }

    pub fn reads(&self) -> Vec<String> {
        self.state.lock().unwrap().reads.clone()
    }

    pub fn low_stock_calls(&self) -> usize {
        self.state.lock().unwrap().low_stock_calls
    }

    pub fn client(&self) -> MartClient {
        MartClient::new(ClientConfig::new(&self.base_url).with_timeout(5)).unwrap()
    }

    pub fn client_with_session_dir(&self, dir: &std::path::Path) -> MartClient {
        MartClient::new(
            ClientConfig::new(&self.base_url)
                .with_timeout(5)
                .with_session_dir(dir),
        )
        .unwrap()
    }
}

pub fn product(id: &str, name: &str, stock: i64, threshold: i64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "model": format!("{}-01", name.to_uppercase()),
        "retailPrice": 1500,
        "wholesalePrice": 1200,
        "originalPrice": 1000,
        "websitePrice": 1600,
        "stock": stock,
        "lowStockThreshold": threshold,
    })
}

type Shared = Arc<Mutex<MockState>>;

fn authorized(state: &Shared, headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", TOKEN);
    let ok = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if ok && !state.lock().unwrap().reject_tokens {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Not authorized, token failed" })),
        )
            .into_response())
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == PASSWORD {
        Json(json!({
            "token": TOKEN,
            "user": {
                "_id": "u1",
                "name": "Admin",
                "email": body["email"],
                "userType": "admin",
            }
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid email or password" })),
        )
            .into_response()
    }
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    Json(json!({ "_id": "u1", "name": "Admin", "email": "admin@etimad.pk", "userType": "admin" }))
        .into_response()
}

async fn logout() -> Response {
    Json(json!({ "message": "Logged out" })).into_response()
}

async fn list_products(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    let products = state.lock().unwrap().products.clone();
    Json(json!({ "success": true, "count": products.len(), "data": products })).into_response()
}

async fn low_stock(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.lock().unwrap().low_stock_calls += 1;
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    let low: Vec<Value> = state
        .lock()
        .unwrap()
        .products
        .iter()
        .filter(|p| p["stock"].as_i64() <= p["lowStockThreshold"].as_i64())
        .cloned()
        .collect();
    Json(Value::Array(low)).into_response()
}

fn read_fixture(state: &Shared, path: String, query: Option<String>) -> Response {
    let mut state = state.lock().unwrap();
    state
        .reads
        .push(format!("GET /{}?{}", path, query.unwrap_or_default()));
    match state.fixtures.get(&path) {
        Some(body) => Json(body.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("No route for {}", path) })),
        )
            .into_response(),
    }
}

async fn list_in(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    read_fixture(&state, collection, query)
}

async fn get_in(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    read_fixture(&state, format!("{}/{}", collection, id), query)
}

fn record(state: &Shared, what: String, body: &Value) -> usize {
    let mut state = state.lock().unwrap();
    state.writes.push((what, body.clone()));
    state.writes.len()
}

async fn create_in(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    let n = record(&state, format!("POST /{}", collection), &body);
    body["_id"] = json!(format!("{}-{}", collection, n));
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_in(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    record(&state, format!("PUT /{}/{}", collection, id), &body);
    body["_id"] = json!(id);
    Json(body).into_response()
}

async fn delete_in(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(r) = authorized(&state, &headers) {
        return r;
    }
    record(&state, format!("DELETE /{}/{}", collection, id), &Value::Null);
    Json(json!({ "message": "Deleted" })).into_response()
}

async fn lcs_track(Path(tracking): Path<String>) -> Response {
    if tracking == "LE123" {
        Json(json!({ "trackingNumber": "LE123", "status": "Delivered", "codAmount": 2500 }))
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Tracking number not found" })),
        )
            .into_response()
    }
}

async fn book_po_list() -> Response {
    Json(json!([
        { "_id": "b1", "name": "محمد علی", "city": "لاہور", "phone": "۰۳۰۰۱۲۳۴۵۶۷" },
        { "_id": "b2", "name": "Sara Khan", "city": "Karachi" },
        { "_id": "b3", "name": "علي رضا", "city": "Multan" },
    ]))
    .into_response()
}

/// Start the mock backend on an ephemeral port
pub async fn spawn_backend(products: Vec<Value>) -> MockBackend {
    let state: Shared = Arc::new(Mutex::new(MockState {
        products,
        ..Default::default()
    }));

    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/auth/logout", post(logout))
        .route("/products", get(list_products))
        .route("/products/low-stock", get(low_stock))
        .route("/lcs/track/{tracking}", get(lcs_track))
        .route("/book-po", get(book_po_list))
        .route("/{collection}", get(list_in).post(create_in))
        .route(
            "/{collection}/{id}",
            get(get_in).put(update_in).delete(delete_in),
        )
        .with_state(state.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        state,
        base_url: format!("http://{}/api", addr),
    }
}

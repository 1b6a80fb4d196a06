#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use mongodb::{Client, Database, bson::oid::ObjectId};
use serde_json::{Map, Value, json};
use shopery_server::{
    AppState, app,
    config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig},
    utils::jwt,
};
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

// Nothing listens on port 1, so any handler that reaches the store fails fast.
const OFFLINE_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

pub fn auth() -> AuthConfig {
    AuthConfig {
        secret: SECRET.to_string(),
        token_ttl_secs: 3600,
    }
}

fn config(uri: &str, name: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_size: 1024 * 1024,
        },
        database: DatabaseConfig {
            uri: uri.to_string(),
            name: name.to_string(),
            stable_api: false,
        },
        auth: auth(),
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

/// Router whose database is unreachable. Good for everything decided before
/// the first store call.
pub async fn offline_app() -> Router {
    let client = Client::with_uri_str(OFFLINE_URI).await.unwrap();
    let config = config(OFFLINE_URI, "offline");
    let state = AppState::new(client.database("offline"), config.auth.clone());

    app::router(state, &config).unwrap()
}

pub struct LiveApp {
    pub app: Router,
    pub db: Database,
}

/// Router over a throwaway database on `TEST_MONGODB_URI`. Panics when the
/// variable is unset; store-backed tests are `#[ignore]`d for that reason.
pub async fn live_app() -> LiveApp {
    let uri = std::env::var("TEST_MONGODB_URI")
        .expect("TEST_MONGODB_URI must point at a MongoDB server for ignored store tests");
    let name = format!("shopery_test_{}", ObjectId::new().to_hex());

    let client = Client::with_uri_str(&uri).await.unwrap();
    let db = client.database(&name);
    let config = config(&uri, &name);
    let state = AppState::new(db.clone(), config.auth.clone());

    LiveApp {
        app: app::router(state, &config).unwrap(),
        db,
    }
}

impl LiveApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.app, method, uri, token, body).await
    }

    pub async fn cleanup(self) {
        self.db.drop().await.unwrap();
    }
}

pub fn token_for(email: &str) -> String {
    let mut identity = Map::new();
    identity.insert("email".to_string(), json!(email));
    jwt::issue_token(&auth(), identity).unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

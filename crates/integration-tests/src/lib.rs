//! Integration tests for the Bookmarket client.
//!
//! The client runs against a `wiremock` server standing in for the
//! marketplace backend, with its session persisted in a temporary file the
//! way the CLI keeps it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bookmarket-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use bookmarket_client::{BookmarketApi, ClientConfig, Router, SessionStore};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// A client wired to a mock backend.
pub struct TestContext {
    pub server: MockServer,
    pub api: BookmarketApi,
    pub router: Router,
    pub session: SessionStore,
    /// Keeps the session file alive for the duration of the test.
    pub dir: TempDir,
}

impl TestContext {
    /// Client with the default success codes (`200`, `0`).
    pub async fn new() -> Self {
        Self::accepting("200,0").await
    }

    /// Client that accepts only `codes` as envelope success.
    pub async fn accepting(codes: &str) -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let mut config = ClientConfig::new(server.uri().parse().unwrap());
        config.success_codes = codes.parse().unwrap();
        config.session_file = dir.path().join("session.json");

        let session = SessionStore::persistent(&config.session_file);
        let api = BookmarketApi::from_config(&config, session.clone()).unwrap();
        let router = Router::application(session.clone());

        Self {
            server,
            api,
            router,
            session,
            dir,
        }
    }

    /// A second session over the same file, as a restarted process would see it.
    pub fn reopen_session(&self) -> SessionStore {
        SessionStore::persistent(self.dir.path().join("session.json"))
    }
}

/// Envelope `{code: 200, data, msg: ""}`.
pub fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": data, "msg": "" }))
}

/// Envelope with a failure code.
pub fn failure(code: Value, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "code": code, "data": null, "msg": msg }))
}

/// In-memory stand-in for a backend collection.
///
/// `POST` appends the JSON body with a fresh `id` (and `userId`), `GET`
/// lists, `DELETE ?id=` removes and fails with `msg` "not found" when the id
/// is unknown.
#[derive(Clone, Default)]
pub struct FakeCollection {
    items: Arc<Mutex<Vec<Value>>>,
}

impl FakeCollection {
    /// Collection seeded with `items`.
    pub fn with_items(items: Vec<Value>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    /// Current contents.
    pub fn items(&self) -> Vec<Value> {
        self.items.lock().unwrap().clone()
    }
}

impl Respond for FakeCollection {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut items = self.items.lock().unwrap();
        match request.method.as_str() {
            "GET" => success(Value::Array(items.clone())),
            "POST" => {
                let mut body: Value = serde_json::from_slice(&request.body).unwrap();
                let id = items
                    .iter()
                    .filter_map(|item| item["id"].as_u64())
                    .max()
                    .unwrap_or(0)
                    + 1;
                body["id"] = json!(id);
                body["userId"] = json!(1);
                items.push(body);
                success(json!(id))
            }
            "DELETE" => {
                let id = request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "id")
                    .and_then(|(_, value)| value.parse::<u64>().ok());
                let before = items.len();
                items.retain(|item| item["id"].as_u64() != id);
                if items.len() == before {
                    failure(json!(404), "not found")
                } else {
                    success(Value::Null)
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

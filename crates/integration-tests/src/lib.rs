//! Integration test harness for the Mango Market console.
//!
//! [`TestBackend`] is an in-process mocked marketplace backend: an axum
//! router bound to an ephemeral port that records every request it receives
//! (method, path, JSON body or multipart parts) and answers from per-route
//! stubs. Tests drive the real [`MarketClient`] against it over real HTTP,
//! so the assertions cover exactly what would go over the wire.
//!
//! # Example
//!
//! ```rust,ignore
//! let backend = TestBackend::spawn().await;
//! backend.stub("PUT", "/order/status/o1/vendor/v1", 200, json!({}));
//!
//! let client = backend.authed_client().await;
//! client.update_order_status(&"o1".into(), &"v1".into(), OrderStatus::Shipped).await?;
//!
//! let requests = backend.requests();
//! assert_eq!(requests.len(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use secrecy::SecretString;

use mango_market_client::{ClientConfig, MarketClient};

/// One request as seen by the mocked backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Parsed JSON body, when the request carried one.
    pub json: Option<serde_json::Value>,
    /// Multipart parts, when the request was multipart.
    pub parts: Vec<RecordedPart>,
    /// Whether an `Authorization: Bearer` header was present.
    pub bearer: bool,
}

impl RecordedRequest {
    /// The JSON body, panicking with a useful message when absent.
    ///
    /// # Panics
    ///
    /// Panics if the request had no JSON body.
    #[must_use]
    pub fn json_body(&self) -> &serde_json::Value {
        self.json
            .as_ref()
            .unwrap_or_else(|| panic!("{} {} had no JSON body", self.method, self.path))
    }

    /// All recorded parts with the given name, in arrival order.
    #[must_use]
    pub fn parts_named(&self, name: &str) -> Vec<&RecordedPart> {
        self.parts.iter().filter(|part| part.name == name).collect()
    }

    /// The text content of the single part with the given name.
    ///
    /// # Panics
    ///
    /// Panics if the part is missing or not text.
    #[must_use]
    pub fn text_part(&self, name: &str) -> &str {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .and_then(|part| part.text.as_deref())
            .unwrap_or_else(|| panic!("no text part '{name}' on {} {}", self.method, self.path))
    }
}

/// One multipart part as seen by the mocked backend.
#[derive(Debug, Clone)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    /// UTF-8 content for text parts; `None` for binary file parts.
    pub text: Option<String>,
    /// Raw content length in bytes.
    pub len: usize,
}

#[derive(Debug)]
struct Stub {
    method: String,
    path: String,
    status: u16,
    body: serde_json::Value,
}

#[derive(Clone, Default)]
struct BackendState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    stubs: Arc<Mutex<Vec<Stub>>>,
}

/// In-process mocked marketplace backend.
pub struct TestBackend {
    addr: SocketAddr,
    state: BackendState,
}

impl TestBackend {
    /// Bind an ephemeral port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound (test environment failure).
    pub async fn spawn() -> Self {
        let state = BackendState::default();
        let router = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("test backend local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve test backend");
        });

        Self { addr, state }
    }

    /// The backend's base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register a canned response for `method path`.
    ///
    /// Unstubbed paths answer 404 with a message body, which exercises the
    /// client's error path rather than hanging the test.
    pub fn stub(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        self.state
            .stubs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Stub {
                method: method.to_owned(),
                path: path.to_owned(),
                status,
                body,
            });
    }

    /// Everything received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Requests matching `method path`.
    #[must_use]
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }

    /// A client pointed at this backend, with no session token.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> MarketClient {
        let config = ClientConfig::new(
            self.base_url().parse().expect("test backend URL"),
            Duration::from_secs(5),
            PathBuf::from("unused-session.json"),
        );
        MarketClient::new(&config).expect("build test client")
    }

    /// A client with a test session token set.
    #[must_use]
    pub async fn authed_client(&self) -> MarketClient {
        let client = self.client();
        client.set_token(SecretString::from("test-token")).await;
        client
    }
}

async fn handle(State(state): State<BackendState>, request: Request<Body>) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let bearer = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "));
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let mut recorded = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        json: None,
        parts: Vec::new(),
        bearer,
    };

    if content_type.starts_with("multipart/form-data") {
        if let Ok(mut multipart) = Multipart::from_request(request, &()).await {
            while let Ok(Some(field)) = multipart.next_field().await {
                let name = field.name().unwrap_or_default().to_owned();
                let file_name = field.file_name().map(str::to_owned);
                let part_content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.unwrap_or_default();
                recorded.parts.push(RecordedPart {
                    name,
                    file_name,
                    content_type: part_content_type,
                    text: std::str::from_utf8(&bytes).ok().map(str::to_owned),
                    len: bytes.len(),
                });
            }
        }
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        if !bytes.is_empty() {
            recorded.json = serde_json::from_slice(&bytes).ok();
        }
    }

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(recorded);

    let stubs = state.stubs.lock().unwrap_or_else(PoisonError::into_inner);
    stubs
        .iter()
        .find(|stub| stub.method == method && stub.path == path)
        .map_or_else(
            || {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({
                        "message": format!("no stub for {method} {path}")
                    })),
                )
                    .into_response()
            },
            |stub| {
                (
                    StatusCode::from_u16(stub.status).unwrap_or(StatusCode::OK),
                    Json(stub.body.clone()),
                )
                    .into_response()
            },
        )
}

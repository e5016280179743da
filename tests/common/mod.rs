//! An in-process stand-in for the generation and submission endpoints.
//! Every request it receives is recorded so tests can inspect what was sent.
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Extension, Router,
};
use serde_json::Value;
use tokio::sync::oneshot;
use webhook_sql::config::{Identity, Settings};

pub const GENERATE_PATH: &str = "/hiring/generateWebhook/JAVA";
pub const SUBMIT_PATH: &str = "/hiring/testWebhook/JAVA";

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// The canned answer an endpoint gives.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Reply {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Reply {
            status,
            body: body.into(),
        }
    }
}

struct MockState {
    generate: Reply,
    submit: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn record(&self, path: &str, headers: &HeaderMap, body: &str) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let request = RecordedRequest {
            path: path.to_owned(),
            authorization: header("authorization"),
            content_type: header("content-type"),
            body: serde_json::from_str(body).unwrap_or(Value::Null),
        };

        self.requests.lock().unwrap().push(request);
    }
}

fn reply(reply: &Reply) -> impl IntoResponse {
    (
        reply.status,
        [(CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}

async fn generate_webhook(
    Extension(state): Extension<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.record(GENERATE_PATH, &headers, &body);
    reply(&state.generate)
}

async fn test_webhook(
    Extension(state): Extension<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.record(SUBMIT_PATH, &headers, &body);
    reply(&state.submit)
}

/// A running mock, serving on an ephemeral local port until dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub fn start(generate: Reply, submit: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(MockState {
            generate,
            submit,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route(GENERATE_PATH, post(generate_webhook))
            .route(SUBMIT_PATH, post(test_webhook))
            .layer(Extension(state.clone()));
        let (tx, rx) = oneshot::channel::<()>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async move {
                axum::Server::from_tcp(listener)
                    .unwrap()
                    .serve(app.into_make_service())
                    .with_graceful_shutdown(async {
                        rx.await.ok();
                    })
                    .await
                    .unwrap();
            });
        });

        MockServer {
            addr,
            state,
            shutdown: Some(tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Settings pointing both endpoints at this mock.
    pub fn settings(&self) -> Settings {
        Settings {
            generate_url: self.url(GENERATE_PATH),
            submit_url: self.url(SUBMIT_PATH),
            timeout_secs: 5,
            identity: Identity::default(),
        }
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path == path)
            .cloned()
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}{}", addr, GENERATE_PATH)
}

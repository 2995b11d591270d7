//! Shared mock-backend harness for resource client tests.
//!
//! Spins an in-process axum server on an ephemeral port, answers every
//! request through a test-supplied responder, and records each request
//! (method, path, headers, body) for assertion.

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

/// One request captured by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// `Content-Type` header, if the request carried one.
    pub content_type: Option<String>,
    /// Every `Authorization` header value, in order.
    pub authorization: Vec<String>,
    pub body: String,
}

/// Produces the (status, body) the mock backend answers with.
/// Responses are always sent with a JSON content type.
type Responder = dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

/// A running mock backend.
pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Requests captured so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single captured request, panicking if there is not exactly one.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "Expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn capture(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string()),
        authorization: headers
            .get_all(AUTHORIZATION)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect(),
        body: String::from_utf8(body.to_vec()).unwrap(),
    };

    let (status, response_body) = (state.responder)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    (
        status,
        [(CONTENT_TYPE, "application/json")],
        response_body,
    )
}

/// Start a mock backend answering every request via `responder`.
pub async fn spawn<F>(responder: F) -> MockBackend
where
    F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        responder: Arc::new(responder),
    };

    let app = Router::new().fallback(capture).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Shorthand: a backend answering everything with one canned response.
pub async fn spawn_with(status: StatusCode, body: &'static str) -> MockBackend {
    spawn(move |_| (status, body.to_string())).await
}

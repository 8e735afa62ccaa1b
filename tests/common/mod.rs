//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    Router,
};
use reacto_gateway::{GatewayConfig, GatewayServer};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A running mock of the Reacto endpoint.
pub struct MockUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the upstream")
    }
}

/// Start a programmable upstream; `respond` picks status and body per request.
pub async fn start_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    start_upstream_with_delay(Duration::ZERO, respond).await
}

/// Like [`start_upstream`], answering only after `delay`.
pub async fn start_upstream_with_delay<F>(delay: Duration, respond: F) -> MockUpstream
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let recorded = requests.clone();
    let app = Router::new().fallback(move |request: Request| {
        let recorded = recorded.clone();
        let respond = respond.clone();
        async move {
            let (parts, body) = request.into_parts();
            let body = axum::body::to_bytes(body, usize::MAX).await.unwrap().to_vec();
            let request = RecordedRequest {
                method: parts.method.to_string(),
                headers: parts.headers,
                body,
            };
            let (status, text) = respond(&request);
            recorded.lock().unwrap().push(request);
            tokio::time::sleep(delay).await;
            (StatusCode::from_u16(status).unwrap(), text)
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream {
        url: format!("http://{addr}/reacto"),
        requests,
    }
}

/// An address nothing listens on.
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A running gateway; dropping it shuts the server down.
pub struct Gateway {
    pub base: String,
    _shutdown: oneshot::Sender<()>,
}

/// Start the gateway in front of `upstream_url` on an ephemeral port.
pub async fn start_gateway(upstream_url: &str) -> Gateway {
    let mut config = GatewayConfig::default();
    config.upstream.url = upstream_url.to_string();
    config.upstream.connect_timeout_secs = 1;
    config.upstream.request_timeout_secs = 2;
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = GatewayServer::new(config).unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = server
            .run(listener, async {
                let _ = rx.await;
            })
            .await;
    });

    Gateway {
        base: format!("http://{addr}"),
        _shutdown: tx,
    }
}

/// Value of the session cookie set by a response, as a `Cookie` header value.
pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("REACTO_SESSID="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use modexia_api::{ApiConfig, ApiServer, RecordStore, Shutdown};
use modexia_sdk::ApiClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Server over the embedded seed data with default settings.
pub fn seeded_server() -> ApiServer {
    let store = RecordStore::seeded().unwrap();
    ApiServer::new(ApiConfig::default(), Arc::new(store))
}

/// Drive one request through the router in-process.
#[allow(dead_code)]
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

/// GET `uri` and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = send(router, Method::GET, uri, &[]).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// A live server on an ephemeral loopback port.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl RunningServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// SDK client bound to this server.
    pub fn client(&self) -> ApiClient {
        ApiClient::with_client(http_client(), &self.base_url())
    }
}

/// Non-pooled client that ignores proxy environment variables.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Start a seeded server on 127.0.0.1 with an OS-assigned port.
#[allow(dead_code)]
pub async fn spawn_server() -> RunningServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = seeded_server();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

//! In-process http server for the integration tests.
//!
//! Binds `127.0.0.1:0` synchronously so the port is known before the first
//! request, then serves on a current-thread tokio runtime in a background
//! thread. The blocking client under test never runs inside that runtime.
#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};

use axum::{
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Router,
};

pub fn app() -> Router {
    Router::new()
        .route("/hello", get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "hello") }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nothing here") }))
        .route("/echo", any(echo))
}

/// Answers with `<method> <x-token header or -> <body>`.
async fn echo(method: Method, headers: HeaderMap, body: String) -> String {
    let token = headers
        .get("x-token")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    format!("{method} {token} {body}")
}

pub fn spawn_server() -> SocketAddr {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    addr
}

/// A url on a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

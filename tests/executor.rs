//! The blocking executor against a live local server.

mod common;

use std::collections::BTreeMap;

use httpreq::errors::ExecutorError;
use httpreq::header_parser::parse_headers;
use httpreq::http_request_executor::{execute_http_request, ExecutionContext};
use httpreq::request_config::RequestConfig;

#[test]
fn get_renders_status_headers_and_body() {
    let addr = common::spawn_server();
    let context = ExecutionContext::new().unwrap();
    let config = RequestConfig::new("GET", &format!("http://{addr}/hello"), BTreeMap::new(), "");

    let response = execute_http_request(&config, &context).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.headers["Content-Type"], vec!["text/plain"]);
    assert_eq!(response.body, "hello");

    let rendered = response.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Status: 200 OK");
    assert!(lines[1].starts_with("Headers: "));
    assert!(lines[1].contains("\"Content-Type\": [\"text/plain\"]"));
    assert_eq!(lines[2], "Body: hello");
}

#[test]
fn sends_method_headers_and_body() {
    let addr = common::spawn_server();
    let context = ExecutionContext::new().unwrap();
    let config = RequestConfig::new(
        "POST",
        &format!("http://{addr}/echo"),
        parse_headers("X-Token: secret:1 , Content-Type:text/plain"),
        "payload",
    );

    let response = execute_http_request(&config, &context).unwrap();
    assert_eq!(response.body, "POST secret:1 payload");
}

#[test]
fn empty_body_is_sent_as_empty_payload() {
    let addr = common::spawn_server();
    let context = ExecutionContext::new().unwrap();
    let config = RequestConfig::new("PUT", &format!("http://{addr}/echo"), BTreeMap::new(), "");

    let response = execute_http_request(&config, &context).unwrap();
    assert_eq!(response.body, "PUT - ");
}

#[test]
fn error_status_is_still_rendered() {
    let addr = common::spawn_server();
    let context = ExecutionContext::new().unwrap();
    let config = RequestConfig::new("GET", &format!("http://{addr}/missing"), BTreeMap::new(), "");

    let response = execute_http_request(&config, &context).unwrap();
    assert_eq!(response.status_line(), "404 Not Found");
    assert_eq!(response.body, "nothing here");
}

#[test]
fn unreachable_host_is_transport_error() {
    let context = ExecutionContext::new().unwrap();
    let config = RequestConfig::new("GET", &common::unreachable_url(), BTreeMap::new(), "");

    let err = execute_http_request(&config, &context).unwrap_err();
    assert!(matches!(err, ExecutorError::Transport(_)));
    assert_eq!(err.label(), "Error executing request");
    assert!(!err.is_request_error());
}

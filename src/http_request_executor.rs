use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use log::{debug, info};
use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};

use crate::errors::{ExecutorError, UsageError};
use crate::header_parser::format_headers;
use crate::request_config::RequestConfig;

pub struct ExecutionContext {
    pub client: Client,
}

impl ExecutionContext {
    /// Builds the blocking client with reqwest's defaults (redirects, timeouts, tls).
    pub fn new() -> Result<ExecutionContext, ExecutorError> {
        let client = Client::builder().build().map_err(ExecutorError::Client)?;
        return Ok(ExecutionContext { client });
    }
}

impl RequestConfig {
    /// The verb is passed through as given; an empty one means GET.
    pub fn http_method(&self) -> Result<Method, ExecutorError> {
        if self.method.is_empty() {
            return Ok(Method::GET);
        }
        return Method::from_bytes(self.method.as_bytes())
            .map_err(|_| ExecutorError::InvalidMethod(self.method.clone()));
    }

    pub fn uri(&self) -> Result<Url, ExecutorError> {
        if self.url.is_empty() {
            return Err(UsageError::MissingUrl.into());
        }
        let url = self.url.parse::<Url>().map_err(|source| ExecutorError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        return match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ExecutorError::UnsupportedScheme(scheme.to_string())),
        };
    }

    pub fn header_map(&self) -> Result<HeaderMap, ExecutorError> {
        let mut map = HeaderMap::new();
        for (key, value) in self.headers.iter() {
            let name = HeaderName::try_from(key.as_str()).map_err(|e| ExecutorError::InvalidHeader {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            let value = HeaderValue::try_from(value.as_str()).map_err(|e| ExecutorError::InvalidHeader {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            map.insert(name, value);
        }
        return Ok(map);
    }
}

/// Turns a config into a request without touching the network.
pub fn build_request(config: &RequestConfig) -> Result<Request, ExecutorError> {
    let mut request = Request::new(config.http_method()?, config.uri()?);
    *request.headers_mut() = config.header_map()?;
    if !config.body.is_empty() {
        *request.body_mut() = Some(config.body.clone().into());
    }
    debug!(
        "built {} {} with headers [{}] and {} byte body",
        request.method(),
        request.url(),
        format_headers(&config.headers),
        config.body.len()
    );
    return Ok(request);
}

/// Sends the request described by `config` and waits for the full response.
///
/// The response body is read to the end before returning; the connection is
/// released when the response is dropped, on the error path as well.
pub fn execute_http_request(
    config: &RequestConfig,
    context: &ExecutionContext,
) -> Result<RenderedResponse, ExecutorError> {
    let request = build_request(config)?;
    info!("{} {}", request.method(), request.url());

    let response = context.client.execute(request).map_err(ExecutorError::Transport)?;
    let status = response.status();
    let headers = collect_headers(response.headers());
    info!("{} answered with {}", response.url(), status);

    let body = response.text().map_err(ExecutorError::Body)?;
    return Ok(RenderedResponse::new(status, headers, body));
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        map.entry(canonical_header_name(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    return map;
}

/// `content-type` -> `Content-Type`
pub fn canonical_header_name(name: &str) -> String {
    return name
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

impl RenderedResponse {
    pub fn new(status: StatusCode, headers: BTreeMap<String, Vec<String>>, body: String) -> RenderedResponse {
        return RenderedResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(|r| r.to_string()),
            headers,
            body,
        };
    }

    pub fn status_line(&self) -> String {
        return match &self.reason {
            Some(reason) => format!("{} {}", self.status, reason),
            None => self.status.to_string(),
        };
    }
}

impl Display for RenderedResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Status: {}", self.status_line())?;
        writeln!(f, "Headers: {:?}", self.headers)?;
        write!(f, "Body: {}", self.body)
    }
}

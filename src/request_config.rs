use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ParseError;

/// Serializable description of one http request.
///
/// Field names are written in lower case; the capitalized and upper case
/// spellings are accepted when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default, alias = "Method", alias = "METHOD")]
    pub method: String,
    #[serde(default, alias = "Url", alias = "URL")]
    pub url: String,
    #[serde(default, alias = "Headers", alias = "HEADERS", deserialize_with = "null_as_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, alias = "Body", alias = "BODY")]
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let headers: Option<BTreeMap<String, String>> = Option::deserialize(deserializer)?;
    Ok(headers.unwrap_or_default())
}

impl RequestConfig {
    pub fn new(method: &str, url: &str, headers: BTreeMap<String, String>, body: &str) -> RequestConfig {
        return RequestConfig {
            method: method.to_string(),
            url: url.to_string(),
            headers,
            body: body.to_string(),
        };
    }
}

/// Encodes a config as an indented json document.
pub fn encode(config: &RequestConfig) -> Result<String, ParseError> {
    let mut data = serde_json::to_string_pretty(config)?;
    data.push('\n');
    Ok(data)
}

pub fn decode(data: &str) -> Result<RequestConfig, ParseError> {
    decode_bytes(data.as_bytes())
}

/// Decodes raw file content; invalid utf-8 is a decode failure, not a read failure.
pub fn decode_bytes(data: &[u8]) -> Result<RequestConfig, ParseError> {
    Ok(serde_json::from_slice(data)?)
}

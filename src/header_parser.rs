use std::collections::BTreeMap;

/// Parses `key1:value1,key2:value2` into a header mapping.
///
/// Each comma separated segment is split on its first colon, so values may
/// contain colons themselves. Segments without a colon are dropped. There is
/// no escaping: a literal comma always starts a new segment.
pub fn parse_headers(header_str: &str) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if header_str.is_empty() {
        return headers;
    }
    header_str
        .split(',')
        .filter_map(|pair| pair.split_once(':'))
        .for_each(|(key, value)| {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        });
    return headers;
}

/// Renders a header mapping back into the `key:value,key:value` form, sorted by key.
pub fn format_headers(headers: &BTreeMap<String, String>) -> String {
    return headers
        .iter()
        .map(|(key, value)| format!("{}:{}", key, value))
        .collect::<Vec<String>>()
        .join(",");
}

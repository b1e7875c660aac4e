//! Query encoder: turns a parameter mapping into a request URL.
//!
//! Pure function, no I/O. The only escaping performed is on the free-text
//! `q` value; every other value is appended exactly as rendered. Keys are
//! never validated: the remote API is the sole judge of what it accepts.

use crate::model::{ParamValue, RequestParams};
use tracing::debug;

/// Public Pixabay search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// The only parameter whose value is percent-encoded.
pub const SEARCH_KEY: &str = "q";

// ===== Endpoint =====

/// Fixed base address plus API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    api_key: String,
}

impl Endpoint {
    /// Endpoint at `base_url` authenticated with `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Address without the key.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn address(&self, key: &str) -> String {
        format!("{}?key={}", self.base_url, key)
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

// ===== BaseOptions =====

/// Immutable defaults sent with every request.
///
/// A caller-supplied parameter with the same name overrides the default in
/// place; it is never emitted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseOptions {
    /// Hits per page.
    pub per_page: u32,
    /// Hide adult content.
    pub safesearch: bool,
    /// Only editor-selected images.
    pub editors_choice: bool,
}

impl BaseOptions {
    /// Parameter names owned by the defaults record, in emission order.
    pub const KEYS: [&'static str; 3] = ["per_page", "safesearch", "editors_choice"];

    fn entries(&self) -> [(&'static str, ParamValue); 3] {
        [
            ("per_page", ParamValue::Int(self.per_page)),
            ("safesearch", ParamValue::Text(self.safesearch.to_string())),
            (
                "editors_choice",
                ParamValue::Text(self.editors_choice.to_string()),
            ),
        ]
    }
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self {
            per_page: 25,
            safesearch: true,
            editors_choice: true,
        }
    }
}

// ===== RequestDescriptor =====

/// Fully encoded request: final URL plus the wire-level query pairs.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    url: String,
    redacted_url: String,
    query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Final address to GET.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Same address with the API key masked, for logs and display.
    pub fn redacted_url(&self) -> &str {
        &self.redacted_url
    }

    /// Query pairs after the API key, as they appear on the wire.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

impl std::fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("url", &self.redacted_url)
            .field("query", &self.query)
            .finish()
    }
}

// ===== Encoding =====

/// Encode `params` on top of the endpoint and base options.
///
/// Base options come first, then every key of `params` in the mapping's
/// own order as `&key=value`. Only the `q` value is percent-encoded.
pub fn encode(
    endpoint: &Endpoint,
    base: &BaseOptions,
    params: Option<&RequestParams>,
) -> RequestDescriptor {
    let mut query = Vec::with_capacity(BaseOptions::KEYS.len() + params.map_or(0, |p| p.len()));

    for (key, default) in base.entries() {
        let value = params.and_then(|p| p.get(key)).unwrap_or(&default);
        query.push((key.to_string(), render_value(key, value)));
    }

    if let Some(params) = params {
        for (key, value) in params.iter() {
            if BaseOptions::KEYS.contains(&key) {
                continue;
            }
            query.push((key.to_string(), render_value(key, value)));
        }
    }

    let url = join(endpoint.address(&endpoint.api_key), &query);
    let redacted_url = join(endpoint.address("***"), &query);
    debug!(url = %redacted_url, "final url");

    RequestDescriptor {
        url,
        redacted_url,
        query,
    }
}

fn render_value(key: &str, value: &ParamValue) -> String {
    if key == SEARCH_KEY {
        urlencoding::encode(&value.to_string()).into_owned()
    } else {
        value.to_string()
    }
}

fn join(mut url: String, query: &[(String, String)]) -> String {
    for (key, value) in query {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;

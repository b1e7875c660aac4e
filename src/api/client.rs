//! Search transport: performs the GET and interprets the response body.

use crate::api::RequestDescriptor;
use crate::model::{FetchError, Hit};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Parsed search response.
///
/// `hits` is `None` when the body lacked a well-formed `hits` array; the
/// controller treats that the same as a failed request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    /// Image records, `None` when the body has no usable `hits` array.
    pub hits: Option<Vec<Hit>>,
    /// Total number of hits the API can page through.
    pub total_hits: Option<u64>,
}

/// Interpret a response body.
///
/// Any body that is valid JSON is accepted; shapes other than an object
/// with a `hits` array yield `hits: None`. Records inside the array are
/// parsed one by one and malformed ones are skipped.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Json(e.to_string()))?;

    let hits = value
        .get("hits")
        .and_then(Value::as_array)
        .map(|records| records.iter().filter_map(parse_hit).collect());
    let total_hits = value.get("totalHits").and_then(Value::as_u64);

    Ok(SearchResponse { hits, total_hits })
}

fn parse_hit(record: &Value) -> Option<Hit> {
    match Hit::deserialize(record) {
        Ok(hit) => Some(hit),
        Err(e) => {
            warn!(error = %e, "skipping malformed hit record");
            None
        }
    }
}

// ===== SearchClient =====

/// Executes encoded search requests.
///
/// Implemented over HTTP for the real API and by in-memory fakes in tests.
pub trait SearchClient: Send {
    /// Run `request` and parse the body.
    fn search(&self, request: &RequestDescriptor) -> Result<SearchResponse, FetchError>;
}

/// Blocking HTTP client for the search endpoint.
pub struct HttpSearchClient {
    agent: ureq::Agent,
}

impl HttpSearchClient {
    /// Client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl SearchClient for HttpSearchClient {
    fn search(&self, request: &RequestDescriptor) -> Result<SearchResponse, FetchError> {
        debug!(url = %request.redacted_url(), "GET");

        let response = match self.agent.get(request.url()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(FetchError::Status { status, body });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Transport(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|e| FetchError::Body(e.to_string()))?;
        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hits_and_total() {
        let body = r#"{
            "total": 4692,
            "totalHits": 500,
            "hits": [
                {"id": 1, "previewURL": "p/1.jpg", "webformatURL": "w/1.jpg", "imageWidth": 640, "imageHeight": 480},
                {"id": 2, "previewURL": "p/2.jpg", "webformatURL": "w/2.jpg", "imageWidth": 480, "imageHeight": 640}
            ]
        }"#;

        let resp = parse_search_response(body).unwrap();
        let hits = resp.hits.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].image_height, 640);
        assert_eq!(resp.total_hits, Some(500));
    }

    #[test]
    fn missing_hits_field_is_none() {
        let resp = parse_search_response(r#"{"totalHits": 0}"#).unwrap();
        assert_eq!(resp.hits, None);
        assert_eq!(resp.total_hits, Some(0));
    }

    #[test]
    fn non_array_hits_is_none() {
        let resp = parse_search_response(r#"{"hits": "nope"}"#).unwrap();
        assert_eq!(resp.hits, None);
    }

    #[test]
    fn non_object_body_is_none() {
        let resp = parse_search_response("[1, 2, 3]").unwrap();
        assert_eq!(resp.hits, None);
        assert_eq!(resp.total_hits, None);
    }

    #[test]
    fn malformed_hit_record_is_skipped() {
        let body = r#"{
            "totalHits": 3,
            "hits": [
                {"id": 1, "previewURL": "p/1.jpg", "webformatURL": "w/1.jpg", "imageWidth": 640, "imageHeight": 480},
                {"id": 2},
                {"id": 3, "previewURL": "p/3.jpg", "webformatURL": "w/3.jpg", "imageWidth": 500, "imageHeight": 500}
            ]
        }"#;

        let hits = parse_search_response(body).unwrap().hits.unwrap();

        let ids: Vec<u64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn all_malformed_records_give_empty_page() {
        let resp = parse_search_response(r#"{"hits": [{"id": 1}, 7]}"#).unwrap();
        assert_eq!(resp.hits, Some(vec![]));
    }

    #[test]
    fn empty_hits_array_is_some_empty() {
        let resp = parse_search_response(r#"{"hits": []}"#).unwrap();
        assert_eq!(resp.hits, Some(vec![]));
    }

    #[test]
    fn invalid_json_is_error() {
        let err = parse_search_response("[ERROR 400] Invalid API key").unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }
}

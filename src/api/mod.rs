//! Remote image-search API boundary.
//!
//! - `encoder`: pure parameter → URL encoding
//! - `client`: HTTP transport and response interpretation

pub mod client;
pub mod encoder;

pub use client::{parse_search_response, HttpSearchClient, SearchClient, SearchResponse};
pub use encoder::{encode, BaseOptions, Endpoint, RequestDescriptor, DEFAULT_BASE_URL};

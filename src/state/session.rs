//! Pagination / result-set controller.
//!
//! `Session` owns everything the home screen knows about the current query:
//! search text, active category, active filters, page counter and the
//! accumulated result set. User actions are methods that mutate the session
//! and return the fetch to issue (if any); the shell executes the fetch and
//! feeds the outcome back through [`Session::apply_response`].
//!
//! # Fetch bookkeeping
//!
//! - Every issued fetch gets a sequence number one higher than the last.
//!   Only the response carrying the latest sequence is applied; anything
//!   older is stale and dropped.
//! - While a fetch is in flight no next-page fetch is issued. The in-flight
//!   marker clears only when the latest fetch settles (success or failure),
//!   never because the scroll position moved.
//! - A failed next-page fetch restores the page counter, so the same page
//!   is requested again on the next bottom-reached event.

use crate::api::SearchResponse;
use crate::model::{
    Category, FetchError, FilterKey, FilterSet, MergeMode, RequestParams, ResultSet,
};
use tracing::{debug, info, warn};

/// Search text must be longer than this many characters to trigger a search.
pub const MIN_SEARCH_CHARS: usize = 2;

// ===== FetchRequest =====

/// A fetch the shell must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number; only the latest issued is merged.
    pub seq: u64,
    /// Query parameters for the encoder.
    pub params: RequestParams,
    /// How the hits are merged.
    pub mode: MergeMode,
}

/// What happened to a settled response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDisposition {
    /// Hits were merged into the result set.
    Merged {
        /// Number of hits added to the result set.
        added: usize,
    },
    /// Transport failure or unusable body; result set untouched.
    Failed,
    /// A newer fetch had been issued; response dropped.
    Stale,
}

// ===== ScrollMetrics =====

/// Scroll position report from the grid, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// First visible row.
    pub offset: u32,
    /// Visible rows.
    pub viewport_height: u32,
    /// Total rows of content.
    pub content_height: u32,
}

impl ScrollMetrics {
    /// Within one row of the bottom-most scroll position.
    pub fn at_bottom(&self) -> bool {
        let bottom = self.content_height.saturating_sub(self.viewport_height);
        self.offset + 1 >= bottom
    }
}

// ===== Session =====

#[derive(Debug, Clone)]
struct InFlight {
    seq: u64,
    mode: MergeMode,
    params: RequestParams,
    previous_page: u32,
}

/// Per-screen session state. Created on mount, dropped on exit.
#[derive(Debug, Clone)]
pub struct Session {
    search_text: String,
    active_category: Option<Category>,
    filters: FilterSet,
    page: u32,
    results: ResultSet,
    last_seq: u64,
    in_flight: Option<InFlight>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on page 1 with nothing selected.
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            active_category: None,
            filters: FilterSet::new(),
            page: 1,
            results: ResultSet::new(),
            last_seq: 0,
            in_flight: None,
        }
    }

    /// Session starting with a search term or a category already selected.
    ///
    /// Used for command-line presets; the first fetch still comes from
    /// [`Session::initial_fetch`]. The preset follows [`Session::search`]:
    /// a term of one or two characters is dropped, and a search term clears
    /// the category.
    pub fn with_preset(search: Option<String>, category: Option<Category>) -> Self {
        let mut session = Self::new();
        let search = search.filter(|text| !text.is_empty());
        match search {
            Some(text) if text.chars().count() > MIN_SEARCH_CHARS => {
                if category.is_some() {
                    debug!("search preset overrides category preset");
                }
                session.search_text = text;
            }
            Some(text) => {
                debug!(query = %text, "search preset too short, ignored");
                session.active_category = category;
            }
            None => session.active_category = category,
        }
        session
    }

    // ===== Accessors =====

    /// Stored search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Selected category, if any.
    pub fn active_category(&self) -> Option<Category> {
        self.active_category
    }

    /// Active filters.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Page of the last issued request.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Hits merged so far.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Whether any fetch is awaiting its response.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the pending fetch is a next-page fetch.
    pub fn is_loading_more(&self) -> bool {
        matches!(
            self.in_flight,
            Some(InFlight {
                mode: MergeMode::Append,
                ..
            })
        )
    }

    /// Sequence number of the most recently issued fetch (0 before any).
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    // ===== Transitions =====

    /// First fetch on mount: page 1 with whatever preset is active.
    pub fn initial_fetch(&mut self) -> FetchRequest {
        self.page = 1;
        self.results.clear();
        let params = self.standard_params();
        self.issue(params, MergeMode::Replace)
    }

    /// Search text changed.
    ///
    /// More than two characters searches, empty text resets to the
    /// unsearched listing; one or two characters only update the stored text.
    pub fn search(&mut self, text: &str) -> Option<FetchRequest> {
        self.search_text = text.to_string();

        let len = text.chars().count();
        if len > MIN_SEARCH_CHARS {
            self.page = 1;
            self.results.clear();
            self.active_category = None;
            let mut params = RequestParams::for_page(1).with("q", text);
            push_filters(&mut params, &self.filters);
            info!(query = text, "search");
            Some(self.issue(params, MergeMode::Replace))
        } else if len == 0 {
            self.page = 1;
            self.results.clear();
            self.active_category = None;
            let mut params = RequestParams::for_page(1);
            push_filters(&mut params, &self.filters);
            info!("search cleared");
            Some(self.issue(params, MergeMode::Replace))
        } else {
            debug!(query = text, "search text too short, waiting");
            None
        }
    }

    /// Category chip pressed: activates `cat`, or deactivates it if it is
    /// already active. Always clears the search text.
    pub fn change_category(&mut self, cat: Category) -> FetchRequest {
        self.active_category = if self.active_category == Some(cat) {
            None
        } else {
            Some(cat)
        };
        self.search_text.clear();
        self.results.clear();
        self.page = 1;

        let mut params = RequestParams::for_page(1);
        push_filters(&mut params, &self.filters);
        if let Some(cat) = self.active_category {
            params.set("category", cat.as_str());
        }
        info!(category = ?self.active_category, "category changed");
        self.issue(params, MergeMode::Replace)
    }

    /// Filter sheet applied. Empty selections are ignored entirely.
    pub fn apply_filters(&mut self, new_filters: FilterSet) -> Option<FetchRequest> {
        if new_filters.is_empty() {
            return None;
        }
        self.filters = new_filters;
        self.page = 1;
        self.results.clear();
        info!(count = self.filters.len(), "filters applied");
        let params = self.standard_params();
        Some(self.issue(params, MergeMode::Replace))
    }

    /// Filter sheet reset. No-op when no filters are active.
    pub fn reset_filters(&mut self) -> Option<FetchRequest> {
        if self.filters.is_empty() {
            return None;
        }
        self.filters.clear();
        self.page = 1;
        self.results.clear();
        info!("filters reset");
        let params = self.standard_params();
        Some(self.issue(params, MergeMode::Replace))
    }

    /// Remove a single filter chip. Refetches even if the key was absent.
    pub fn clear_filter(&mut self, key: FilterKey) -> FetchRequest {
        self.filters.remove(key);
        self.page = 1;
        self.results.clear();
        info!(filter = %key, "filter cleared");
        let params = self.standard_params();
        self.issue(params, MergeMode::Replace)
    }

    /// Request the next page, appending to the result set.
    ///
    /// Refused while any fetch is in flight or once every reachable hit has
    /// been loaded.
    pub fn load_next_page(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            debug!("next page refused: fetch in flight");
            return None;
        }
        if self.results.is_exhausted() {
            debug!("next page refused: results exhausted");
            return None;
        }
        let previous_page = self.page;
        self.page += 1;
        info!(page = self.page, "loading next page");
        let params = self.standard_params();
        let request = self.issue(params, MergeMode::Append);
        if let Some(in_flight) = self.in_flight.as_mut() {
            in_flight.previous_page = previous_page;
        }
        Some(request)
    }

    /// Scroll position changed; loads the next page once the bottom is reached.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FetchRequest> {
        if metrics.at_bottom() {
            self.load_next_page()
        } else {
            None
        }
    }

    /// Settle a fetch.
    pub fn apply_response(
        &mut self,
        seq: u64,
        outcome: Result<SearchResponse, FetchError>,
    ) -> ResponseDisposition {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.seq == seq => in_flight,
            other => {
                self.in_flight = other;
                debug!(seq, latest = self.last_seq, "dropping stale response");
                return ResponseDisposition::Stale;
            }
        };

        let hits = match outcome {
            Ok(SearchResponse {
                hits: Some(hits),
                total_hits,
            }) => Some((hits, total_hits)),
            Ok(_) => {
                warn!(seq, "response has no hits field");
                None
            }
            Err(e) => {
                warn!(seq, error = %e, "fetch failed");
                None
            }
        };

        match hits {
            Some((hits, total_hits)) => {
                let added = hits.len();
                self.results
                    .merge(in_flight.mode, hits, in_flight.params, total_hits);
                debug!(seq, added, total = self.results.len(), "response merged");
                ResponseDisposition::Merged { added }
            }
            None => {
                if in_flight.mode == MergeMode::Append {
                    self.page = in_flight.previous_page;
                }
                ResponseDisposition::Failed
            }
        }
    }

    // ===== Internals =====

    /// `{page, ...filters, category?, q?}` for the current state.
    fn standard_params(&self) -> RequestParams {
        let mut params = RequestParams::for_page(self.page);
        push_filters(&mut params, &self.filters);
        if let Some(cat) = self.active_category {
            params.set("category", cat.as_str());
        }
        if !self.search_text.is_empty() {
            params.set("q", self.search_text.as_str());
        }
        params
    }

    fn issue(&mut self, params: RequestParams, mode: MergeMode) -> FetchRequest {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.in_flight = Some(InFlight {
            seq,
            mode,
            params: params.clone(),
            previous_page: self.page,
        });
        FetchRequest { seq, params, mode }
    }
}

fn push_filters(params: &mut RequestParams, filters: &FilterSet) {
    for (key, value) in filters.iter() {
        params.set(key.as_str(), value);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

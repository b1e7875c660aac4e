//! Accumulated, ordered collection of hits currently displayed.

use crate::model::{Hit, RequestParams};

/// How a fetched page is merged into the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Discard the existing hits and keep only the response.
    Replace,
    /// Concatenate the response after the existing hits.
    Append,
}

/// Ordered hits plus the parameters of the request that last fed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    hits: Vec<Hit>,
    params: RequestParams,
    total_hits: Option<u64>,
}

impl ResultSet {
    /// Empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hits in display order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Number of hits held.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// True when no hits are held.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Parameters of the request whose response was merged last.
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// Number of hits the API reports as reachable for this query.
    pub fn total_hits(&self) -> Option<u64> {
        self.total_hits
    }

    /// True once every reachable hit has been accumulated.
    pub fn is_exhausted(&self) -> bool {
        match self.total_hits {
            Some(total) => self.hits.len() as u64 >= total,
            None => false,
        }
    }

    /// Drop all hits and the last response metadata.
    pub fn clear(&mut self) {
        self.hits.clear();
        self.params = RequestParams::default();
        self.total_hits = None;
    }

    /// Merge a response page.
    ///
    /// Replace keeps exactly `hits`; Append keeps prior hits followed by
    /// `hits` in order. Duplicates are not removed.
    pub fn merge(
        &mut self,
        mode: MergeMode,
        hits: Vec<Hit>,
        params: RequestParams,
        total_hits: Option<u64>,
    ) {
        match mode {
            MergeMode::Replace => self.hits = hits,
            MergeMode::Append => self.hits.extend(hits),
        }
        self.params = params;
        self.total_hits = total_hits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hit::fixtures::hit;

    fn ids(set: &ResultSet) -> Vec<u64> {
        set.hits().iter().map(|h| h.id).collect()
    }

    #[test]
    fn append_concatenates_in_order() {
        let mut set = ResultSet::new();
        set.merge(
            MergeMode::Replace,
            vec![hit(1, 1, 1), hit(2, 1, 1)],
            RequestParams::for_page(1),
            None,
        );
        set.merge(
            MergeMode::Append,
            vec![hit(3, 1, 1), hit(4, 1, 1)],
            RequestParams::for_page(2),
            None,
        );
        assert_eq!(ids(&set), vec![1, 2, 3, 4]);
        assert_eq!(set.params().page(), Some(2));
    }

    #[test]
    fn replace_discards_prior_hits() {
        let mut set = ResultSet::new();
        set.merge(
            MergeMode::Replace,
            vec![hit(1, 1, 1), hit(2, 1, 1)],
            RequestParams::for_page(1),
            None,
        );
        set.merge(
            MergeMode::Replace,
            vec![hit(3, 1, 1), hit(4, 1, 1)],
            RequestParams::for_page(1),
            None,
        );
        assert_eq!(ids(&set), vec![3, 4]);
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut set = ResultSet::new();
        set.merge(MergeMode::Replace, vec![hit(1, 1, 1)], RequestParams::for_page(1), None);
        set.merge(MergeMode::Append, vec![hit(1, 1, 1)], RequestParams::for_page(2), None);
        assert_eq!(ids(&set), vec![1, 1]);
    }

    #[test]
    fn exhausted_when_total_reached() {
        let mut set = ResultSet::new();
        assert!(!set.is_exhausted());
        set.merge(
            MergeMode::Replace,
            vec![hit(1, 1, 1), hit(2, 1, 1)],
            RequestParams::for_page(1),
            Some(2),
        );
        assert!(set.is_exhausted());
    }

    #[test]
    fn clear_resets_everything() {
        let mut set = ResultSet::new();
        set.merge(MergeMode::Replace, vec![hit(1, 1, 1)], RequestParams::for_page(1), Some(9));
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.total_hits(), None);
        assert!(set.params().is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::constants::PAGE_SIZE;

/// One page query against the descriptor endpoint
///
/// Requests are immutable values: paging derives a new request through
/// [`SearchRequest::with_offset`]. Equality is structural, which is what the
/// request cell relies on to suppress repeated searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub text: String,
    /// Epoch milliseconds; only lineage known at that instant is returned
    #[serde(rename = "asAtTime")]
    pub as_at_timestamp: i64,
    pub offset: usize,
}

impl SearchRequest {
    pub const PAGE_SIZE: usize = PAGE_SIZE;

    pub fn new(text: impl Into<String>, as_at_timestamp: i64) -> Self {
        Self {
            text: text.into(),
            as_at_timestamp,
            offset: 0,
        }
    }

    pub fn with_offset(&self, offset: usize) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    /// True for the first page of a search
    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    /// True when both requests page through the same text and instant
    pub fn same_search(&self, other: &SearchRequest) -> bool {
        self.text == other.text && self.as_at_timestamp == other.as_at_timestamp
    }

    /// Query-string pairs for the descriptor endpoint; `q` is omitted for empty text
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("asAtTime", self.as_at_timestamp.to_string()),
            ("offset", self.offset.to_string()),
            ("size", Self::PAGE_SIZE.to_string()),
        ];
        if !self.text.is_empty() {
            pairs.push(("q", self.text.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_first_page() {
        let request = SearchRequest::new("abc", 42);
        assert_eq!(request.text, "abc");
        assert_eq!(request.as_at_timestamp, 42);
        assert_eq!(request.offset, 0);
        assert!(request.is_first_page());
    }

    #[test]
    fn test_with_offset_keeps_text_and_timestamp() {
        let first = SearchRequest::new("orders", 1_000);
        let next = first.with_offset(20);
        assert_eq!(next.text, "orders");
        assert_eq!(next.as_at_timestamp, 1_000);
        assert_eq!(next.offset, 20);
        assert_eq!(first.offset, 0);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(SearchRequest::new("a", 1), SearchRequest::new("a", 1));
        assert_ne!(SearchRequest::new("a", 1), SearchRequest::new("a", 2));
        assert_ne!(SearchRequest::new("a", 1), SearchRequest::new("a", 1).with_offset(1));
    }

    #[test]
    fn test_same_search_ignores_offset() {
        let first = SearchRequest::new("a", 1);
        assert!(first.same_search(&first.with_offset(40)));
        assert!(!first.same_search(&SearchRequest::new("b", 1)));
        assert!(!first.same_search(&SearchRequest::new("a", 2)));
    }

    #[test]
    fn test_query_pairs_omit_empty_text() {
        let pairs = SearchRequest::new("", 5).query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "q"));
        assert!(pairs.contains(&("size", "20".to_string())));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(SearchRequest::new("x", 7).with_offset(3)).unwrap();
        assert_eq!(json["asAtTime"], 7);
        assert_eq!(json["offset"], 3);
        assert_eq!(json["text"], "x");
    }
}

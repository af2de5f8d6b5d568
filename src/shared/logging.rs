//! Structured logging module for the dataset browser
//!
//! Provides consistent, contextual logging across the search flow.
//! Uses tracing with structured fields so every event can be filtered by operation.

use crate::domain::models::SearchRequest;

/// Log operations for the different stages of a search
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    FormChange,
    Search,
    ScrollPage,
    Fetch,
    Render,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::FormChange => "form_change",
            LogOperation::Search => "search",
            LogOperation::ScrollPage => "scroll_page",
            LogOperation::Fetch => "fetch",
            LogOperation::Render => "render",
        }
    }
}

/// Log a debounced form change being scheduled
pub fn log_form_change(text: &str, delay_ms: u64) {
    tracing::trace!(
        operation = LogOperation::FormChange.as_str(),
        text = text,
        delay_ms = delay_ms,
        "Form change scheduled"
    );
}

/// Log a new search request entering the request cell
pub fn log_search_issued(request: &SearchRequest) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        text = %request.text,
        as_at = request.as_at_timestamp,
        offset = request.offset,
        "Search request issued"
    );
}

/// Log a request suppressed because it equals the previous one
pub fn log_duplicate_request(request: &SearchRequest) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        text = %request.text,
        as_at = request.as_at_timestamp,
        offset = request.offset,
        "Duplicate request suppressed"
    );
}

/// Log a rejected form timestamp
pub fn log_invalid_timestamp(input: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Search.as_str(),
        timestamp = input,
        error = error,
        "Invalid search timestamp, search not issued"
    );
}

/// Log a scroll-triggered page request
pub fn log_scroll_page(offset: usize) {
    tracing::debug!(
        operation = LogOperation::ScrollPage.as_str(),
        offset = offset,
        "Scrolled to bottom, requesting next page"
    );
}

/// Log fetch start
pub fn log_fetch_start(sequence: u64, request: &SearchRequest) {
    tracing::debug!(
        operation = LogOperation::Fetch.as_str(),
        sequence = sequence,
        text = %request.text,
        offset = request.offset,
        "Fetching lineage descriptors"
    );
}

/// Log fetch success
pub fn log_fetch_success(sequence: u64, count: usize, rendered: usize) {
    tracing::info!(
        operation = LogOperation::Render.as_str(),
        sequence = sequence,
        fetched = count,
        rendered = rendered,
        "Descriptors rendered"
    );
}

/// Log fetch failure
pub fn log_fetch_error(sequence: u64, error: &str) {
    tracing::error!(
        operation = LogOperation::Fetch.as_str(),
        sequence = sequence,
        error = error,
        "Failed to fetch lineage descriptors"
    );
}

/// Log a response dropped because a newer one was already applied
pub fn log_stale_response(sequence: u64, newest_applied: u64) {
    tracing::debug!(
        operation = LogOperation::Render.as_str(),
        sequence = sequence,
        newest_applied = newest_applied,
        "Dropped stale descriptor response"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::FormChange.as_str(), "form_change");
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::ScrollPage.as_str(), "scroll_page");
        assert_eq!(LogOperation::Fetch.as_str(), "fetch");
        assert_eq!(LogOperation::Render.as_str(), "render");
    }
}

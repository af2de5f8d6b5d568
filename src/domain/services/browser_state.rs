//! Headless state of the dataset browser
//!
//! Owns the search form, the request cell and the rendered descriptor list.
//! UI bindings feed it form edits, scroll events and fetch results; everything
//! here is synchronous so it can sit inside a signal and be unit tested directly.
//!
//! Fetches are not serialized. Each accepted request gets a [`FetchTicket`]
//! and its result is applied in [`BrowserState::complete_fetch`] according to
//! the configured [`MergePolicy`] and [`StalePolicy`].

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BrowserConfig;
use crate::domain::models::{PersistedDatasetDescriptor, ScrollEvent, SearchForm, SearchRequest};
use crate::domain::services::request_cell::{SearchRequestCell, SubscriptionId};
use crate::shared::errors::{BrowserError, Result};
use crate::shared::logging::{
    log_fetch_error, log_fetch_success, log_invalid_timestamp, log_scroll_page, log_search_issued,
    log_stale_response,
};
use crate::shared::utils::{parse_timestamp, TimeBasis};

/// How a fetched page combines with the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Every page replaces the list
    #[default]
    Replace,
    /// First pages replace, later pages are appended
    Append,
}

impl FromStr for MergePolicy {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(MergePolicy::Replace),
            "append" => Ok(MergePolicy::Append),
            _ => Err(BrowserError::Config(format!("Unknown merge policy: {}", s))),
        }
    }
}

/// Ordering rule for overlapping fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Results are applied in resolution order
    #[default]
    LastResolvedWins,
    /// Results older than an already applied one are dropped
    LatestRequestWins,
}

/// Handle for one dispatched fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub sequence: u64,
    pub request: SearchRequest,
}

#[derive(Debug)]
pub struct BrowserState {
    form: SearchForm,
    requests: SearchRequestCell,
    descriptors: Vec<PersistedDatasetDescriptor>,
    time_basis: TimeBasis,
    debounce: Duration,
    merge_policy: MergePolicy,
    stale_policy: StalePolicy,
    next_sequence: u64,
    newest_applied: Option<u64>,
    in_flight: usize,
    last_error: Option<String>,
    form_error: Option<String>,
}

impl BrowserState {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            form: SearchForm::default(),
            requests: SearchRequestCell::new(),
            descriptors: Vec::new(),
            time_basis: config.time_basis,
            debounce: Duration::from_millis(config.debounce_ms),
            merge_policy: config.merge_policy,
            stale_policy: config.stale_policy,
            next_sequence: 0,
            newest_applied: None,
            in_flight: 0,
            last_error: None,
            form_error: None,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// Store an edited form and return how long to wait before searching it.
    ///
    /// Clearing non-blank text searches at once; every other edit, including
    /// timestamp edits while the text is blank, waits the configured debounce.
    pub fn edit_form(&mut self, form: SearchForm) -> Duration {
        let clearing = !self.form.is_blank() && form.is_blank();
        self.form = form;
        if clearing { Duration::ZERO } else { self.debounce }
    }

    /// Reset the form to empty text and `now`; returns the new form value.
    /// The reset form is searched without debounce.
    pub fn reset(&mut self, now: DateTime<Utc>) -> SearchForm {
        self.form = SearchForm::reset_at(now, self.time_basis);
        self.form_error = None;
        self.form.clone()
    }

    /// Turn a settled form value into a first-page request.
    ///
    /// `Ok(None)` means the request equals the current one and nothing is fetched.
    pub fn new_search(&mut self, form: &SearchForm) -> Result<Option<SearchRequest>> {
        let as_at = match parse_timestamp(&form.timestamp, self.time_basis) {
            Ok(millis) => millis,
            Err(e) => {
                log_invalid_timestamp(&form.timestamp, &e.to_string());
                self.form_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.form_error = None;

        let accepted = self.requests.next(SearchRequest::new(form.text.clone(), as_at));
        if let Some(request) = &accepted {
            log_search_issued(request);
        }
        Ok(accepted)
    }

    /// Request the next page when an inner container scrolled to its bottom
    pub fn on_scroll(&mut self, event: &ScrollEvent) -> Option<SearchRequest> {
        if !event.requests_next_page() {
            return None;
        }
        let next = self.requests.get()?.with_offset(self.descriptors.len());
        let accepted = self.requests.next(next);
        if let Some(request) = &accepted {
            log_scroll_page(request.offset);
        }
        accepted
    }

    pub fn current_request(&self) -> Option<&SearchRequest> {
        self.requests.get()
    }

    /// Observe every accepted request transition
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SearchRequest) + 'static) -> SubscriptionId {
        self.requests.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.requests.unsubscribe(id)
    }

    pub fn begin_fetch(&mut self, request: SearchRequest) -> FetchTicket {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.in_flight += 1;
        FetchTicket { sequence, request }
    }

    /// Apply a fetch outcome. Returns true when the rendered list changed.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<PersistedDatasetDescriptor>>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.stale_policy == StalePolicy::LatestRequestWins {
            if let Some(newest) = self.newest_applied.filter(|n| *n > ticket.sequence) {
                log_stale_response(ticket.sequence, newest);
                return false;
            }
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                log_fetch_error(ticket.sequence, &e.to_string());
                self.last_error = Some(e.to_string());
                return false;
            }
        };

        let fetched = page.len();
        match self.merge_policy {
            MergePolicy::Append if !ticket.request.is_first_page() => {
                // A later page of a superseded search must not extend the new results
                if !self.requests.get().is_some_and(|current| current.same_search(&ticket.request)) {
                    log_stale_response(ticket.sequence, self.newest_applied.unwrap_or_default());
                    return false;
                }
                self.descriptors.extend(page)
            }
            _ => self.descriptors = page,
        }
        self.newest_applied = Some(self.newest_applied.map_or(ticket.sequence, |n| n.max(ticket.sequence)));
        self.last_error = None;
        log_fetch_success(ticket.sequence, fetched, self.descriptors.len());
        true
    }

    pub fn descriptors(&self) -> &[PersistedDatasetDescriptor] {
        &self.descriptors
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }
}

//! Latest-value cell for search requests
//!
//! Holds the most recent [`SearchRequest`] and notifies subscribers on every
//! accepted transition. A transition is accepted when the new request differs by
//! value from the one currently held, so repeating a search or re-requesting
//! the same page is a no-op. The cell starts empty and never returns to empty.

use std::fmt;

use crate::domain::models::SearchRequest;
use crate::shared::logging::log_duplicate_request;

pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&SearchRequest)>;

#[derive(Default)]
pub struct SearchRequestCell {
    value: Option<SearchRequest>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
}

impl SearchRequestCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&SearchRequest> {
        self.value.as_ref()
    }

    /// Store `request` as the latest value.
    ///
    /// Returns the request when it was accepted (and subscribers were notified),
    /// `None` when it equals the current value.
    pub fn next(&mut self, request: SearchRequest) -> Option<SearchRequest> {
        if self.value.as_ref() == Some(&request) {
            log_duplicate_request(&request);
            return None;
        }

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&request);
        }
        self.value = Some(request.clone());
        Some(request)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&SearchRequest) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for SearchRequestCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequestCell")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

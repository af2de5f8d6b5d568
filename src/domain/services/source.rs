//! Descriptor source abstraction
//!
//! The browser only needs "give me the page for this request". The HTTP
//! implementation lives in `shared::services::ApiService`.

use async_trait::async_trait;

use crate::domain::models::{PersistedDatasetDescriptor, SearchRequest};
use crate::domain::services::browser_state::FetchTicket;
use crate::shared::errors::Result;
use crate::shared::logging::log_fetch_start;

#[async_trait(?Send)]
pub trait DescriptorSource {
    /// Fetch one page of descriptors matching `request`, in backend order
    async fn lineage_descriptors(&self, request: &SearchRequest) -> Result<Vec<PersistedDatasetDescriptor>>;
}

/// Fetch the page a ticket was issued for
pub async fn fetch_page<S>(source: &S, ticket: &FetchTicket) -> Result<Vec<PersistedDatasetDescriptor>>
where
    S: DescriptorSource + ?Sized,
{
    log_fetch_start(ticket.sequence, &ticket.request);
    source.lineage_descriptors(&ticket.request).await
}

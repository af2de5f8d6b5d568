// Business logic services
// Framework-agnostic, 100% testable

pub mod request_cell;
pub mod debounce;
pub mod source;
pub mod browser_state;

#[cfg(test)]
pub(crate) mod testing;

pub use request_cell::{SearchRequestCell, SubscriptionId};
pub use debounce::Debouncer;
pub use source::{fetch_page, DescriptorSource};
pub use browser_state::{BrowserState, FetchTicket, MergePolicy, StalePolicy};

// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod search;
pub mod descriptor;
pub mod form;
pub mod scroll;

pub use search::SearchRequest;
pub use descriptor::PersistedDatasetDescriptor;
pub use form::SearchForm;
pub use scroll::{ScrollEvent, ScrollMetrics};

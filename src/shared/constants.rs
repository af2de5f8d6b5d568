// Shared constants for the dataset browser

/// Form timestamp layout, `YYYY-MM-DD HH:mm`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// UTC rendering used for descriptor timestamps (`Thu, 01 Jan 1970 00:00:00 GMT`)
pub const UTC_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Rendered in place of a timestamp chrono cannot represent
pub const INVALID_DATE: &str = "Invalid Date";

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Distance from the edge, in pixels, at which a scroll counts as reaching it
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 100.0;

/// Page size sent with every descriptor query
pub const PAGE_SIZE: usize = 20;

pub const DESCRIPTORS_ENDPOINT: &str = "rest/dataset/descriptors";

/// DOM id of the scrollable descriptor list
pub const LIST_CONTAINER_ID: &str = "dataset-browser-list";

// Environment overrides (native only)
pub const ENV_API_URL: &str = "DATASET_BROWSER_API_URL";
pub const ENV_DEBOUNCE_MS: &str = "DATASET_BROWSER_DEBOUNCE_MS";
pub const ENV_TIME_BASIS: &str = "DATASET_BROWSER_TIME_BASIS";
pub const ENV_MERGE: &str = "DATASET_BROWSER_MERGE";

// Custom Dioxus hooks
pub mod use_dataset_browser;

pub use use_dataset_browser::{use_dataset_browser, UseDatasetBrowserReturn};

pub mod common;
pub mod descriptor_item;
pub mod dataset_browser;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use descriptor_item::DescriptorItem;
pub use dataset_browser::DatasetBrowser;

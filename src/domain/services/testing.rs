//! In-memory descriptor source for tests

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{PersistedDatasetDescriptor, SearchRequest};
use crate::domain::services::source::DescriptorSource;
use crate::shared::errors::Result;

/// `count` descriptors named `app-0..`, all written before 2017-07-14
pub fn descriptors(count: usize) -> Vec<PersistedDatasetDescriptor> {
    (0..count)
        .map(|i| PersistedDatasetDescriptor {
            dataset_id: Uuid::new_v4(),
            app_id: format!("local-{}", i),
            app_name: format!("app-{}", i),
            path: format!("hdfs://cluster/data/table_{}", i),
            timestamp: 1_500_000_000_000 + i as i64 * 1_000,
        })
        .collect()
}

/// Filters by text and as-at time, then pages by offset like the backend does
pub struct StaticDescriptorSource {
    records: Vec<PersistedDatasetDescriptor>,
}

impl StaticDescriptorSource {
    pub fn new(records: Vec<PersistedDatasetDescriptor>) -> Self {
        Self { records }
    }
}

#[async_trait(?Send)]
impl DescriptorSource for StaticDescriptorSource {
    async fn lineage_descriptors(&self, request: &SearchRequest) -> Result<Vec<PersistedDatasetDescriptor>> {
        Ok(self
            .records
            .iter()
            .filter(|d| d.timestamp <= request.as_at_timestamp)
            .filter(|d| request.text.is_empty() || d.app_name.contains(&request.text) || d.path.contains(&request.text))
            .skip(request.offset)
            .take(SearchRequest::PAGE_SIZE)
            .cloned()
            .collect())
    }
}

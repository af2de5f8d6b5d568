use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::utils::to_date_string;

/// Dataset lineage descriptor as persisted by the lineage backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDatasetDescriptor {
    pub dataset_id: Uuid,
    pub app_id: String,
    pub app_name: String,
    /// Dataset location URI
    pub path: String,
    /// Epoch milliseconds of the write that produced this dataset
    pub timestamp: i64,
}

impl PersistedDatasetDescriptor {
    pub fn display_timestamp(&self) -> String {
        to_date_string(self.timestamp)
    }

    /// Last path segment, falling back to the whole path
    pub fn short_name(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(path: &str) -> PersistedDatasetDescriptor {
        PersistedDatasetDescriptor {
            dataset_id: Uuid::nil(),
            app_id: "app-1".to_string(),
            app_name: "Nightly ETL".to_string(),
            path: path.to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_deserializes_backend_json() {
        let json = r#"{
            "datasetId": "6f1b7d0c-8a4e-4c38-9d3a-0a5b9a1f2e11",
            "appId": "local-1500000000000",
            "appName": "Orders import",
            "path": "hdfs://cluster/data/orders",
            "timestamp": 1500000000000
        }"#;
        let d: PersistedDatasetDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.app_name, "Orders import");
        assert_eq!(d.timestamp, 1_500_000_000_000);
        assert_eq!(d.dataset_id.to_string(), "6f1b7d0c-8a4e-4c38-9d3a-0a5b9a1f2e11");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(descriptor("hdfs://cluster/data/orders").short_name(), "orders");
        assert_eq!(descriptor("s3://bucket/table/").short_name(), "table");
        assert_eq!(descriptor("orders").short_name(), "orders");
    }

    #[test]
    fn test_display_timestamp() {
        assert_eq!(descriptor("x").display_timestamp(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }
}

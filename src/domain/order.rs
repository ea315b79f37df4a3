use chrono::{DateTime, Utc};

/// A materialized extraction job, nested under a subscription.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: String,
    pub last_activity: DateTime<Utc>,
    pub status: OrderStatus,
    /// Total output size in bytes.
    pub size: u64,
    pub files: FileManifest,
    pub datetime: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Complete,
    Failed,
}

/// Download locations of an order's output files.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct FileManifest {
    #[serde(default)]
    pub http: Vec<String>,
    #[serde(default)]
    pub ftp: Vec<String>,
}

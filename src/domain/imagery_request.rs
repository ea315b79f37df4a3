use chrono::{DateTime, Utc};

use crate::domain::{
    BoundingBox, Channel, Coverage, FileManifest, OrderStatus, OutputFormat, RecordId, Satellite,
    Schedule,
};

/// A one-off extraction job with an explicit time window.
///
/// On submission `job` is `None`; the portal populates it on read with the
/// processing state of the materialized job. The portal stores `start` and
/// `end` at day precision only, so sub-day detail is not guaranteed to
/// round-trip.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageryRequest {
    pub id: RecordId,
    #[serde(flatten)]
    pub area: BoundingBox,
    pub coverage: Vec<Coverage>,
    pub schedule: Vec<Schedule>,
    pub satellite: Vec<Satellite>,
    pub channel: Vec<Channel>,
    pub format: OutputFormat,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<RequestJob>,
}

/// Processing state of a submitted one-off request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RequestJob {
    pub status: OrderStatus,
    pub last_activity: DateTime<Utc>,
    pub size: u64,
    pub files: FileManifest,
    pub datetime: DateTime<Utc>,
    /// Whether the time window lies in the archive rather than the live feed.
    pub old: bool,
}

impl ImageryRequest {
    /// Field-for-field equality over what a caller submits, ignoring the
    /// server-assigned id and the server-populated job state.
    pub fn same_spec(&self, other: &Self) -> bool {
        self.area == other.area
            && self.coverage == other.coverage
            && self.schedule == other.schedule
            && self.satellite == other.satellite
            && self.channel == other.channel
            && self.format == other.format
            && self.start.date_naive() == other.start.date_naive()
            && self.end.date_naive() == other.end.date_naive()
    }

    pub fn is_processing(&self) -> bool {
        self.job
            .as_ref()
            .is_some_and(|job| job.status == OrderStatus::Processing)
    }
}

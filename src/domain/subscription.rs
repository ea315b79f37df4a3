use crate::domain::{
    BoundingBox, Channel, Coverage, Order, OrderStatus, OutputFormat, RecordId, Satellite,
    Schedule, SubscriptionName,
};

/// A persistent rule describing a recurring image-extraction order.
///
/// `orders` is populated by the portal on read (with `append_files`) and is
/// never part of what a caller submits.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Subscription {
    pub id: RecordId,
    pub enabled: bool,
    pub name: SubscriptionName,
    #[serde(flatten)]
    pub area: BoundingBox,
    pub coverage: Vec<Coverage>,
    pub schedule: Vec<Schedule>,
    pub satellite: Vec<Satellite>,
    pub channel: Vec<Channel>,
    pub format: OutputFormat,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Subscription {
    /// Field-for-field equality over what a caller submits, ignoring the
    /// server-assigned id and the server-populated order detail.
    pub fn same_spec(&self, other: &Self) -> bool {
        self.enabled == other.enabled
            && self.name == other.name
            && self.area == other.area
            && self.coverage == other.coverage
            && self.schedule == other.schedule
            && self.satellite == other.satellite
            && self.channel == other.channel
            && self.format == other.format
    }

    pub fn has_pending_orders(&self) -> bool {
        self.orders
            .iter()
            .any(|order| order.status == OrderStatus::Processing)
    }
}

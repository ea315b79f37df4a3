mod bounding_box;
mod channel;
mod coverage;
mod imagery_request;
mod order;
mod output_format;
mod record_id;
mod satellite;
mod schedule;
mod subscription;
mod subscription_name;

pub use bounding_box::BoundingBox;
pub use channel::Channel;
pub use coverage::Coverage;
pub use imagery_request::{ImageryRequest, RequestJob};
pub use order::{FileManifest, Order, OrderStatus};
pub use output_format::OutputFormat;
pub use record_id::RecordId;
pub use satellite::Satellite;
pub use schedule::Schedule;
pub use subscription::Subscription;
pub use subscription_name::SubscriptionName;

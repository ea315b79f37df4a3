mod options;
mod record;
mod request;
mod subscribe;

pub use options::{GetOptions, SetOptions};
pub use request::{GvarImgRequests, RequestProducts};
pub use subscribe::{GvarImgSubscriptions, SubscribeProducts};

pub(crate) use record::{PortalRecord, ResourceClient};

use crate::client::ClassClient;
use crate::domain::{RecordId, Subscription};
use crate::error::ClassError;
use crate::resources::{GetOptions, PortalRecord, ResourceClient, SetOptions};
use crate::wire;

/// Entry point for the subscription resources, one method per product.
pub struct SubscribeProducts<'a> {
    client: &'a ClassClient,
}

impl<'a> SubscribeProducts<'a> {
    pub(crate) fn new(client: &'a ClassClient) -> Self {
        Self { client }
    }

    pub fn gvar_img(&self) -> GvarImgSubscriptions<'a> {
        GvarImgSubscriptions {
            resource: ResourceClient::new(self.client, "subscriptions/gvar_img"),
        }
    }
}

/// The `subscribe.gvar_img` resource.
pub struct GvarImgSubscriptions<'a> {
    resource: ResourceClient<'a, Subscription>,
}

impl GvarImgSubscriptions<'_> {
    /// Fetch the current subscriptions. Nested order/file detail is only
    /// populated when `append_files` is requested.
    #[tracing::instrument(name = "Fetching gvar_img subscriptions", skip(self))]
    pub async fn get(&self, options: GetOptions) -> Result<Vec<Subscription>, ClassError> {
        self.resource.get(options).await
    }

    /// Reconcile the server-side subscriptions to `desired`: `"+"` creates,
    /// a matching id edits, omission deletes.
    #[tracing::instrument(
        name = "Reconciling gvar_img subscriptions",
        skip(self, desired),
        fields(submitted = desired.len())
    )]
    pub async fn set(
        &self,
        desired: &[Subscription],
        options: SetOptions,
    ) -> Result<Vec<Subscription>, ClassError> {
        self.resource.set(desired, options).await
    }
}

impl PortalRecord for Subscription {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn same_spec(&self, other: &Self) -> bool {
        Subscription::same_spec(self, other)
    }

    fn is_pending(&self) -> bool {
        self.has_pending_orders()
    }

    fn form(&self) -> Vec<(&'static str, String)> {
        wire::subscription_form(self)
    }
}

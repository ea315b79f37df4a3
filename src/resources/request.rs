use crate::client::ClassClient;
use crate::domain::{ImageryRequest, RecordId};
use crate::error::ClassError;
use crate::resources::{GetOptions, PortalRecord, ResourceClient, SetOptions};
use crate::wire;

/// Entry point for the one-off request resources, one method per product.
pub struct RequestProducts<'a> {
    client: &'a ClassClient,
}

impl<'a> RequestProducts<'a> {
    pub(crate) fn new(client: &'a ClassClient) -> Self {
        Self { client }
    }

    pub fn gvar_img(&self) -> GvarImgRequests<'a> {
        GvarImgRequests {
            resource: ResourceClient::new(self.client, "requests/gvar_img"),
        }
    }
}

/// The `request.gvar_img` resource.
pub struct GvarImgRequests<'a> {
    resource: ResourceClient<'a, ImageryRequest>,
}

impl GvarImgRequests<'_> {
    /// Fetch the current one-off requests, including their processing state.
    #[tracing::instrument(name = "Fetching gvar_img requests", skip(self))]
    pub async fn get(&self, options: GetOptions) -> Result<Vec<ImageryRequest>, ClassError> {
        self.resource.get(options).await
    }

    /// Reconcile the server-side requests to `desired`: `"+"` creates,
    /// a matching id edits, omission deletes.
    #[tracing::instrument(
        name = "Reconciling gvar_img requests",
        skip(self, desired),
        fields(submitted = desired.len())
    )]
    pub async fn set(
        &self,
        desired: &[ImageryRequest],
        options: SetOptions,
    ) -> Result<Vec<ImageryRequest>, ClassError> {
        self.resource.set(desired, options).await
    }
}

impl PortalRecord for ImageryRequest {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn same_spec(&self, other: &Self) -> bool {
        ImageryRequest::same_spec(self, other)
    }

    fn is_pending(&self) -> bool {
        self.is_processing()
    }

    fn form(&self) -> Vec<(&'static str, String)> {
        wire::request_form(self)
    }
}

use reqwest::StatusCode;
use secrecy::ExposeSecret;

use crate::configuration::PortalSettings;
use crate::error::ClassError;
use crate::resources::{RequestProducts, SubscribeProducts};

/// A logged-in session against the ordering portal.
///
/// The portal tracks sessions through a cookie issued on login; the inner
/// `reqwest` client carries it across calls, so a `ClassClient` can be cloned
/// and shared freely.
#[derive(Clone, Debug)]
pub struct ClassClient {
    http_client: reqwest::Client,
    base_url: String,
    poll_interval: std::time::Duration,
    poll_max_attempts: u32,
}

impl ClassClient {
    /// Open a session: build the HTTP client and submit the login form.
    #[tracing::instrument(
        name = "Opening a portal session",
        skip(settings),
        fields(portal = %settings.base_url, username = %settings.username)
    )]
    pub async fn connect(settings: &PortalSettings) -> Result<Self, ClassError> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(settings.timeout())
            .build()?;
        let client = Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            poll_interval: settings.poll_interval(),
            poll_max_attempts: settings.poll_max_attempts,
        };
        client
            .login(&settings.username, settings.password.expose_secret())
            .await?;
        Ok(client)
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), ClassError> {
        let url = format!("{}/login", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        check_status(response.status())
    }

    /// Handle on the subscription resources.
    pub fn subscribe(&self) -> SubscribeProducts<'_> {
        SubscribeProducts::new(self)
    }

    /// Handle on the one-off request resources.
    pub fn request(&self) -> RequestProducts<'_> {
        RequestProducts::new(self)
    }

    /// Raw escape hatch: fetch an arbitrary portal path (query string
    /// included) and return the response body as text.
    ///
    /// Bulk deletion is addressed this way:
    /// `sub_delete?actionbox=<id>&actionbox=<id>`.
    #[tracing::instrument(name = "Fetching a raw portal path", skip(self))]
    pub async fn get_raw(&self, path_and_query: &str) -> Result<String, ClassError> {
        let response = self
            .http_client
            .get(self.url_for(path_and_query))
            .send()
            .await?;
        check_status(response.status())?;
        Ok(response.text().await?)
    }

    pub(crate) async fn get_json<T>(&self, path_and_query: &str) -> Result<T, ClassError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .get(self.url_for(path_and_query))
            .send()
            .await?;
        check_status(response.status())?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Undecodable portal response: {:?}", e);
            ClassError::MalformedResponse(e.into())
        })
    }

    pub(crate) async fn post_form<T>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T, ClassError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.url_for(path))
            .form(form)
            .send()
            .await?;
        check_status(response.status())?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Undecodable portal response: {:?}", e);
            ClassError::MalformedResponse(e.into())
        })
    }

    /// Bulk-delete records by id through the portal's `sub_delete` action.
    #[tracing::instrument(name = "Bulk-deleting portal records", skip(self), fields(count = ids.len()))]
    pub(crate) async fn bulk_delete(&self, ids: &[&str]) -> Result<(), ClassError> {
        if ids.is_empty() {
            return Ok(());
        }
        let query = ids
            .iter()
            .map(|id| format!("actionbox={}", id))
            .collect::<Vec<_>>()
            .join("&");
        self.get_raw(&format!("sub_delete?{}", query)).await?;
        Ok(())
    }

    pub(crate) fn poll_interval(&self) -> std::time::Duration {
        self.poll_interval
    }

    pub(crate) fn poll_max_attempts(&self) -> u32 {
        self.poll_max_attempts
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            path_and_query.trim_start_matches('/')
        )
    }
}

fn check_status(status: StatusCode) -> Result<(), ClassError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(ClassError::AuthenticationFailed)
    } else if status.is_client_error() || status.is_server_error() {
        Err(ClassError::Portal { status })
    } else {
        Ok(())
    }
}

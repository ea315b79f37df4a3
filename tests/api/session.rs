use noaaclass::ClassError;
use noaaclass::client::ClassClient;
use noaaclass::configuration::PortalSettings;
use noaaclass::resources::GetOptions;
use secrecy::Secret;

use crate::fake_portal::{PortalOptions, USERNAME, spawn_fake_portal};
use crate::helpers::spawn_portal;

#[tokio::test]
async fn connect_fails_with_the_wrong_password() {
    // Arrange
    let portal = spawn_fake_portal(PortalOptions::default()).await;

    // Act
    let outcome = ClassClient::connect(&PortalSettings {
        base_url: portal.address.clone(),
        username: USERNAME.to_string(),
        password: Secret::new("definitely-wrong".to_string()),
        timeout_milliseconds: 2_000,
        poll_interval_milliseconds: 20,
        poll_max_attempts: 5,
    })
    .await;

    // Assert
    assert!(matches!(outcome, Err(ClassError::AuthenticationFailed)));
}

#[tokio::test]
async fn a_connected_session_reaches_both_resources() {
    // Arrange
    let app = spawn_portal().await;

    // Act
    let subscriptions = app
        .client
        .subscribe()
        .gvar_img()
        .get(GetOptions::default())
        .await;
    let requests = app
        .client
        .request()
        .gvar_img()
        .get(GetOptions::default())
        .await;

    // Assert: the session cookie from login authorizes both collections.
    claims::assert_ok!(subscriptions);
    claims::assert_ok!(requests);
}

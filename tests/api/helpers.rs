use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use noaaclass::client::ClassClient;
use noaaclass::configuration::{PortalSettings, get_configuration};
use noaaclass::domain::{
    BoundingBox, Channel, Coverage, ImageryRequest, OutputFormat, RecordId, Satellite, Schedule,
    Subscription, SubscriptionName,
};
use noaaclass::telemetry::{get_subscriber, init_subscriber};
use secrecy::Secret;

use crate::fake_portal::{FakePortal, PASSWORD, PortalOptions, USERNAME, spawn_fake_portal};

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestPortal {
    pub portal: FakePortal,
    pub client: ClassClient,
}

pub async fn spawn_portal() -> TestPortal {
    spawn_portal_with(PortalOptions::default()).await
}

pub async fn spawn_portal_with(options: PortalOptions) -> TestPortal {
    LazyLock::force(&TRACING);
    let portal = spawn_fake_portal(options).await;
    let client = connect(&portal, 20, 50).await.expect("Failed to log in.");
    TestPortal { portal, client }
}

pub async fn connect(
    portal: &FakePortal,
    poll_interval_milliseconds: u64,
    poll_max_attempts: u32,
) -> Result<ClassClient, noaaclass::ClassError> {
    // Start from the on-disk configuration and point it at the fake portal.
    let mut settings: PortalSettings = get_configuration()
        .expect("Failed to read configuration.")
        .portal;
    settings.base_url = portal.address.clone();
    settings.username = USERNAME.to_string();
    settings.password = Secret::new(PASSWORD.to_string());
    settings.timeout_milliseconds = 2_000;
    settings.poll_interval_milliseconds = poll_interval_milliseconds;
    settings.poll_max_attempts = poll_max_attempts;
    ClassClient::connect(&settings).await
}

fn name(label: &str) -> SubscriptionName {
    SubscriptionName::parse(label.to_string()).unwrap()
}

/// The fixture rows of the original acceptance suite: two `[auto]`-marked
/// rows destined for cleanup plus one ordinary row.
pub fn sample_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: RecordId::New,
            enabled: true,
            name: name("[auto] sample1"),
            area: BoundingBox::new(-26.72, -43.59, -71.02, -48.52).unwrap(),
            coverage: vec![Coverage::SouthernHemisphere],
            schedule: vec![Schedule::Routine],
            satellite: vec![Satellite::Goes13],
            channel: vec![Channel::new(1).unwrap()],
            format: OutputFormat::NetCdf,
            orders: vec![],
        },
        Subscription {
            id: RecordId::New,
            enabled: false,
            name: name("[auto] sample2"),
            area: BoundingBox::new(-26.73, -43.52, -71.06, -48.51).unwrap(),
            coverage: vec![Coverage::SouthernHemisphere],
            schedule: vec![Schedule::Routine],
            satellite: vec![Satellite::Goes13],
            channel: vec![Channel::new(2).unwrap()],
            format: OutputFormat::NetCdf,
            orders: vec![],
        },
        Subscription {
            id: RecordId::New,
            enabled: true,
            name: name("static"),
            area: BoundingBox::new(-26.73, -33.52, -61.06, -48.51).unwrap(),
            coverage: vec![Coverage::SouthernHemisphere],
            schedule: vec![Schedule::Routine],
            satellite: vec![Satellite::Goes13],
            channel: vec![Channel::new(1).unwrap()],
            format: OutputFormat::NetCdf,
            orders: vec![],
        },
    ]
}

pub fn sample_requests() -> Vec<ImageryRequest> {
    vec![
        ImageryRequest {
            id: RecordId::New,
            area: BoundingBox::new(-26.72, -43.59, -71.02, -48.52).unwrap(),
            coverage: vec![Coverage::SouthernHemisphere],
            schedule: vec![Schedule::Routine],
            satellite: vec![Satellite::Goes13],
            channel: vec![Channel::new(1).unwrap()],
            format: OutputFormat::NetCdf,
            start: Utc.with_ymd_and_hms(2014, 9, 16, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2014, 9, 16, 17, 59, 59).unwrap(),
            job: None,
        },
        ImageryRequest {
            id: RecordId::New,
            area: BoundingBox::new(-26.73, -43.52, -71.06, -48.51).unwrap(),
            coverage: vec![Coverage::SouthernHemisphere],
            schedule: vec![Schedule::Routine],
            satellite: vec![Satellite::Goes13],
            channel: vec![Channel::new(2).unwrap()],
            format: OutputFormat::NetCdf,
            start: Utc.with_ymd_and_hms(2014, 9, 2, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2014, 9, 3, 17, 59, 59).unwrap(),
            job: None,
        },
    ]
}

/// Round-trip tolerance of the portal contract: floats compare equal after
/// integer truncation, window edges at calendar-day granularity, everything
/// else verbatim.
pub fn assert_requests_match(obtained: &ImageryRequest, original: &ImageryRequest) {
    assert_eq!(obtained.area.north() as i64, original.area.north() as i64);
    assert_eq!(obtained.area.south() as i64, original.area.south() as i64);
    assert_eq!(obtained.area.west() as i64, original.area.west() as i64);
    assert_eq!(obtained.area.east() as i64, original.area.east() as i64);
    assert_eq!(obtained.start.date_naive(), original.start.date_naive());
    assert_eq!(obtained.end.date_naive(), original.end.date_naive());
    assert_eq!(obtained.coverage, original.coverage);
    assert_eq!(obtained.schedule, original.schedule);
    assert_eq!(obtained.satellite, original.satellite);
    assert_eq!(obtained.channel, original.channel);
    assert_eq!(obtained.format, original.format);
}

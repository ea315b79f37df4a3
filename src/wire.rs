//! Form encoding of records for submission to the portal.
//!
//! The portal consumes classic form posts: list-valued fields are repeated
//! keys (`channel=4&channel=5`), timestamps use the portal's own layout.

use crate::domain::{ImageryRequest, Subscription};

pub(crate) const PORTAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn subscription_form(record: &Subscription) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("id", record.id.as_str().to_string()),
        ("enabled", record.enabled.to_string()),
        ("name", record.name.as_ref().to_string()),
    ];
    push_area_and_products(
        &mut pairs,
        &record.area,
        &record.coverage,
        &record.schedule,
        &record.satellite,
        &record.channel,
        record.format,
    );
    pairs
}

pub(crate) fn request_form(record: &ImageryRequest) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("id", record.id.as_str().to_string())];
    push_area_and_products(
        &mut pairs,
        &record.area,
        &record.coverage,
        &record.schedule,
        &record.satellite,
        &record.channel,
        record.format,
    );
    pairs.push((
        "start",
        record.start.format(PORTAL_DATETIME_FORMAT).to_string(),
    ));
    pairs.push(("end", record.end.format(PORTAL_DATETIME_FORMAT).to_string()));
    pairs
}

fn push_area_and_products(
    pairs: &mut Vec<(&'static str, String)>,
    area: &crate::domain::BoundingBox,
    coverage: &[crate::domain::Coverage],
    schedule: &[crate::domain::Schedule],
    satellite: &[crate::domain::Satellite],
    channel: &[crate::domain::Channel],
    format: crate::domain::OutputFormat,
) {
    pairs.push(("north", area.north().to_string()));
    pairs.push(("south", area.south().to_string()));
    pairs.push(("west", area.west().to_string()));
    pairs.push(("east", area.east().to_string()));
    for c in coverage {
        pairs.push(("coverage", c.code().to_string()));
    }
    for s in schedule {
        pairs.push(("schedule", s.code().to_string()));
    }
    for s in satellite {
        pairs.push(("satellite", s.code().to_string()));
    }
    for c in channel {
        pairs.push(("channel", c.number().to_string()));
    }
    pairs.push(("format", format.code().to_string()));
}

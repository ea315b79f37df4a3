/// Cadence on which the portal materializes orders for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Schedule {
    /// Every pass, as imagery arrives.
    #[serde(rename = "R")]
    Routine,
    /// One batch per calendar day.
    #[serde(rename = "D")]
    Daily,
}

impl Schedule {
    pub fn code(&self) -> &'static str {
        match self {
            Schedule::Routine => "R",
            Schedule::Daily => "D",
        }
    }
}

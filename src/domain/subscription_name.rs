use unicode_segmentation::UnicodeSegmentation;

/// Free-text label of a subscription.
///
/// Callers that create rows from automated runs conventionally include the
/// `[auto]` marker in the name so cleanup jobs can find them; the marker is a
/// caller convention, not something this type interprets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionName(String);

impl SubscriptionName {
    /// Returns an instance of `SubscriptionName` if the input satisfies all
    /// our validation constraints on subscription names.
    /// It returns an error message otherwise.
    pub fn parse(s: String) -> Result<SubscriptionName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`).
        let is_too_long = s.graphemes(true).count() > 256;

        // Characters the portal's form handling cannot carry safely.
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}', '&'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid subscription name.", s))
        } else {
            Ok(Self(s))
        }
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }
}

impl AsRef<str> for SubscriptionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubscriptionName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubscriptionName::parse(value)
    }
}

impl From<SubscriptionName> for String {
    fn from(value: SubscriptionName) -> Self {
        value.0
    }
}

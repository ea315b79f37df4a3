/// Identifier of a server-side record.
///
/// The portal assigns ids; callers mark records that do not exist yet with the
/// `"+"` placeholder, which the portal replaces with a real id on submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordId {
    New,
    Assigned(String),
}

impl RecordId {
    pub fn is_new(&self) -> bool {
        matches!(self, RecordId::New)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordId::New => "+",
            RecordId::Assigned(id) => id,
        }
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        if value == "+" {
            RecordId::New
        } else {
            RecordId::Assigned(value)
        }
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

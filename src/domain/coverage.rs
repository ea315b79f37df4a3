/// Region covered by an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Coverage {
    #[serde(rename = "NH")]
    NorthernHemisphere,
    #[serde(rename = "SH")]
    SouthernHemisphere,
    #[serde(rename = "FD")]
    FullDisk,
}

impl Coverage {
    pub fn code(&self) -> &'static str {
        match self {
            Coverage::NorthernHemisphere => "NH",
            Coverage::SouthernHemisphere => "SH",
            Coverage::FullDisk => "FD",
        }
    }
}

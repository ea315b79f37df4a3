/// Delivery format of the extracted imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "NetCDF")]
    NetCdf,
    /// Raw GVAR transmission blocks, unconverted.
    #[serde(rename = "GVAR")]
    GvarRaw,
}

impl OutputFormat {
    pub fn code(&self) -> &'static str {
        match self {
            OutputFormat::NetCdf => "NetCDF",
            OutputFormat::GvarRaw => "GVAR",
        }
    }
}

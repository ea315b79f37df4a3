/// Source spacecraft for gvar_img products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Satellite {
    #[serde(rename = "G13")]
    Goes13,
    #[serde(rename = "G15")]
    Goes15,
}

impl Satellite {
    pub fn code(&self) -> &'static str {
        match self {
            Satellite::Goes13 => "G13",
            Satellite::Goes15 => "G15",
        }
    }
}

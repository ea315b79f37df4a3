/// GVAR imager channel number.
///
/// The imager carries one visible and five infrared channels, numbered 1
/// through 6; anything else is rejected before a request goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Channel(u8);

impl Channel {
    pub fn new(number: u8) -> Result<Self, String> {
        if (1..=6).contains(&number) {
            Ok(Self(number))
        } else {
            Err(format!("{} is not a valid imager channel (1-6).", number))
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::new(value)
    }
}

impl From<Channel> for u8 {
    fn from(value: Channel) -> Self {
        value.0
    }
}

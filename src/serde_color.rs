//! Serde support for [Rgba], encoding colors as hex strings.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Rgba;

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgba;

    #[test]
    fn serializes_as_hex() {
        let json = serde_json::to_string(&Rgba::from_rgb8(11, 87, 208)).unwrap();
        assert_eq!(json, "\"#0b57d0\"");
    }

    #[test]
    fn deserializes_any_supported_form() {
        let from_hex: Rgba = serde_json::from_str("\"#0b57d0\"").unwrap();
        let from_fn: Rgba = serde_json::from_str("\"rgba(11, 87, 208, 1)\"").unwrap();
        assert_eq!(from_hex, from_fn);
    }

    #[test]
    fn malformed_color_is_an_error() {
        assert!(serde_json::from_str::<Rgba>("\"#nope\"").is_err());
    }
}

//! Serialized registry format
//!
//! ```json
//! {
//!     "1F44D-1F3FB": { "Key": "1F44D-1F3FB", "Value": "👍🏻", "Descriptor": "Thumbs Up: Light Skin Tone" }
//! }
//! ```
//!
//! Only `Value` and `Descriptor` are required, anything else in a record is ignored.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess};

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "Value", alias = "value", alias = "glyph")]
    pub glyph: String,

    #[serde(rename = "Descriptor", alias = "descriptor", alias = "name")]
    pub descriptor: String,
}

/// Every `(key, record)` pair of a registry file in file order, duplicates included
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Records(pub Vec<(String, Record)>);

impl<'de> Deserialize<'de> for Records {
    fn deserialize<D>(deserializer: D) -> Result<Records, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Records;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("map of hexidecimal emoji keys to emoji records")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Records, M::Error> {
                let mut records = Vec::with_capacity(map.size_hint().unwrap_or(0));

                // serde_json maps would keep only the last of any duplicate key
                while let Some(entry) = map.next_entry::<String, Record>()? {
                    records.push(entry);
                }

                Ok(Records(records))
            }
        }

        deserializer.deserialize_map(Visitor)
    }
}

impl Records {
    pub fn from_slice(data: &[u8]) -> Result<Records, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Records, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog listing.
///
/// Only `city`, `type` and `bedrooms` are interpreted; every other field in the
/// source record is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

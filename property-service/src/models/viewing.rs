use serde::{Deserialize, Serialize};

/// Identifier of the property a viewing refers to.
///
/// Accepted as either a JSON string or a JSON number and echoed back in the
/// same form. It is never checked against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyId {
    Number(serde_json::Number),
    Text(String),
}

impl PropertyId {
    /// Empty text counts as missing; numeric zero is a real identifier.
    pub fn is_blank(&self) -> bool {
        match self {
            PropertyId::Number(_) => false,
            PropertyId::Text(text) => text.is_empty(),
        }
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyId::Number(n) => write!(f, "{}", n),
            PropertyId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Viewing {
    pub property_id: PropertyId,
    pub user_name: String,
    pub user_email: String,
    pub viewing_time: String,
}

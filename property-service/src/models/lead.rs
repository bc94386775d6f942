use serde::Serialize;

/// A lead as the downstream sinks expect it.
///
/// Field names are the column names of the tabular sink. Leads are forwarded
/// and never stored locally.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Lead {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Property References")]
    pub property_references: String,
}

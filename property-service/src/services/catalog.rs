//! Read-only property catalog and the search filter over it.

use crate::models::Property;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Search criteria after normalization. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    city: Option<String>,
    property_type: Option<String>,
    bedrooms: Option<u32>,
}

impl PropertyFilter {
    /// Build a filter from raw request criteria.
    ///
    /// Empty strings and a bedroom count of zero impose no constraint.
    pub fn new(city: Option<&str>, property_type: Option<&str>, bedrooms: Option<u32>) -> Self {
        Self {
            city: city.filter(|c| !c.is_empty()).map(str::to_lowercase),
            property_type: property_type.filter(|t| !t.is_empty()).map(str::to_lowercase),
            bedrooms: bedrooms.filter(|&b| b != 0),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none() && self.property_type.is_none() && self.bedrooms.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.city
            .as_deref()
            .map_or(true, |city| property.city.to_lowercase() == city)
            && self
                .property_type
                .as_deref()
                .map_or(true, |t| property.property_type.to_lowercase() == t)
            && self.bedrooms.map_or(true, |b| property.bedrooms == b)
    }
}

/// Immutable listing set, loaded once and shared without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    properties: Arc<[Property]>,
}

impl CatalogStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties: properties.into(),
        }
    }

    /// Load the catalog from a JSON array of property records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let path_str = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path_str.clone(),
            source,
        })?;

        let properties: Vec<Property> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path_str.clone(),
                source,
            })?;

        tracing::info!(path = %path_str, count = properties.len(), "Loaded property catalog");

        Ok(Self::new(properties))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    /// Listings matching `filter`, in catalog order.
    pub fn search(&self, filter: &PropertyFilter) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }
}

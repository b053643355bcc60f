//! ID types for catalog entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier assigned by the store
pub type AlbumId = i64;

/// Caller-supplied catalog reference (e.g. a third-party collection id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(value_type = String, example = "123456"))]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    /// Create a new external ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExternalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExternalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_id_display() {
        let id = ExternalId::new("123456");
        assert_eq!(format!("{}", id), "123456");
    }

    #[test]
    fn external_id_serializes_as_plain_string() {
        let id = ExternalId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}

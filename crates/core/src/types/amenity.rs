//! The fixed set of filterable cafe amenities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a preference outside the amenity set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid preference: {0}")]
pub struct ParseAmenityError(pub String);

/// A filterable cafe amenity.
///
/// Each value maps 1:1 to a boolean column on the `cafes` table. The set
/// is closed, which is what makes writing the column name into a filter
/// clause safe - only the associated value is ever bound from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Quiet,
    Cozy,
    Lively,
    Wifi,
    Power,
    Food,
}

impl Amenity {
    /// Every amenity, in table-column order.
    pub const ALL: [Self; 6] = [
        Self::Quiet,
        Self::Cozy,
        Self::Lively,
        Self::Wifi,
        Self::Power,
        Self::Food,
    ];

    /// Name of the boolean column backing this amenity.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Cozy => "cozy",
            Self::Lively => "lively",
            Self::Wifi => "wifi",
            Self::Power => "power",
            Self::Food => "food",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl std::str::FromStr for Amenity {
    type Err = ParseAmenityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiet" => Ok(Self::Quiet),
            "cozy" => Ok(Self::Cozy),
            "lively" => Ok(Self::Lively),
            "wifi" => Ok(Self::Wifi),
            "power" => Ok(Self::Power),
            "food" => Ok(Self::Food),
            _ => Err(ParseAmenityError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_amenity() {
        for amenity in Amenity::ALL {
            assert_eq!(amenity.column().parse::<Amenity>().unwrap(), amenity);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sunny".parse::<Amenity>().unwrap_err();
        assert_eq!(err.to_string(), "invalid preference: sunny");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Wifi".parse::<Amenity>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Amenity::Power).unwrap(), "\"power\"");
        let parsed: Amenity = serde_json::from_str("\"cozy\"").unwrap();
        assert_eq!(parsed, Amenity::Cozy);
    }
}

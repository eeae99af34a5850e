//! Measurement unit vocabulary.
//!
//! Units form a closed enumeration with a stable ordinal. The remote
//! document historically stored the ordinal as a bare number, so the
//! serde implementation accepts both the display name and the ordinal
//! on input while always writing the display name.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FreezerError;

/// Measurement unit for an inventory item.
///
/// The discriminant is the wire ordinal and also the primary sort key
/// when sorting by unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// Weight in grams.
    Gram = 0,
    /// Countable pieces.
    Pieces = 1,
    /// Prepared portions.
    Portions = 2,
}

impl Unit {
    /// All units in ordinal order.
    pub const ALL: [Unit; 3] = [Unit::Gram, Unit::Pieces, Unit::Portions];

    /// Returns the display name used in the remote document and the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Pieces => "pieces",
            Unit::Portions => "portions",
        }
    }

    /// Returns the stable wire ordinal.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Resolves a wire ordinal back to a unit.
    ///
    /// # Errors
    ///
    /// Returns [`FreezerError::InvalidUnitOrdinal`] for ordinals outside
    /// the vocabulary; an unknown ordinal must never decode silently.
    pub fn from_ordinal(ordinal: u64) -> Result<Self, FreezerError> {
        match ordinal {
            0 => Ok(Unit::Gram),
            1 => Ok(Unit::Pieces),
            2 => Ok(Unit::Portions),
            other => Err(FreezerError::InvalidUnitOrdinal(other)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = FreezerError;

    /// Parse a unit display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gram" => Ok(Unit::Gram),
            "pieces" => Ok(Unit::Pieces),
            "portions" => Ok(Unit::Portions),
            _ => Err(FreezerError::UnknownUnit(s.to_string())),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UnitVisitor)
    }
}

struct UnitVisitor;

impl Visitor<'_> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a unit name or numeric unit ordinal")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Unit, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Unit, E> {
        Unit::from_ordinal(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Unit, E> {
        let ordinal = u64::try_from(value)
            .map_err(|_| E::custom(format!("invalid unit ordinal: {value}")))?;
        Unit::from_ordinal(ordinal).map_err(E::custom)
    }
}

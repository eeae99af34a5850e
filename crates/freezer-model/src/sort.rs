//! Sortable-field vocabulary for the inventory view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FreezerError;

/// Field the inventory view can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Item display text.
    #[default]
    Description,
    /// Free-text category.
    Type,
    /// Unit ordinal, then amount.
    Unit,
    /// Date the item entered storage.
    Frozen,
    /// Expiration date.
    Expiration,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Description => "description",
            SortField::Type => "type",
            SortField::Unit => "unit",
            SortField::Frozen => "frozen",
            SortField::Expiration => "expiration",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = FreezerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "description" => Ok(SortField::Description),
            "type" => Ok(SortField::Type),
            "unit" => Ok(SortField::Unit),
            "frozen" => Ok(SortField::Frozen),
            "expiration" => Ok(SortField::Expiration),
            _ => Err(FreezerError::UnknownSortField(s.to_string())),
        }
    }
}

/// Direction of a sort pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// Returns the opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = FreezerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            _ => Err(FreezerError::UnknownSortDirection(s.to_string())),
        }
    }
}

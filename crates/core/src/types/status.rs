//! Baking lifecycle status for cookies.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`BakingStatus`] from a string fails.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown baking status {input:?} (expected one of: dough, in_the_oven, ready_for_sale)")]
pub struct BakingStatusError {
    /// The rejected input.
    pub input: String,
}

/// Where a cookie is in the baking lifecycle.
///
/// Maps to the backend's `bakingStatus` values. Selection is mutually
/// exclusive: a cookie is in exactly one state at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BakingStatus {
    /// Not yet baked.
    #[default]
    Dough,
    /// Currently baking.
    InTheOven,
    /// Baked and available to customers.
    ReadyForSale,
}

impl BakingStatus {
    /// All statuses, in lifecycle order. Useful for rendering a selector.
    pub const ALL: [Self; 3] = [Self::Dough, Self::InTheOven, Self::ReadyForSale];

    /// The wire representation, e.g. `in_the_oven`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dough => "dough",
            Self::InTheOven => "in_the_oven",
            Self::ReadyForSale => "ready_for_sale",
        }
    }

    /// Human-readable label, e.g. `in the oven`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dough => "dough",
            Self::InTheOven => "in the oven",
            Self::ReadyForSale => "ready for sale",
        }
    }
}

impl fmt::Display for BakingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BakingStatus {
    type Err = BakingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dough" => Ok(Self::Dough),
            "in_the_oven" => Ok(Self::InTheOven),
            "ready_for_sale" => Ok(Self::ReadyForSale),
            other => Err(BakingStatusError {
                input: other.to_string(),
            }),
        }
    }
}

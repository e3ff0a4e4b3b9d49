//! User roles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// What a user is allowed to do with the catalog.
///
/// Astronauts produce cookies; customers only browse. The backend enforces
/// this server-side as well - the client role only gates which controls are
/// offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary shopper; signup always produces this role.
    #[default]
    Customer,
    /// Producer; may bake, edit, and jettison their own cookies.
    Astronaut,
}

impl Role {
    /// The wire representation, e.g. `astronaut`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Astronaut => "astronaut",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

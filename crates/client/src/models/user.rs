//! User records.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use moon_cookies_core::{Email, Role, UserId};

/// A user as returned by the backend.
///
/// Immutable from the client's perspective within a session; replaced
/// wholesale on login/logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Gates which catalog controls are offered.
    #[serde(default)]
    pub role: Role,
}

/// Registration data for a new account.
///
/// Signup always produces a `customer`; astronaut accounts are provisioned
/// out of band. The password never appears in serialized form - the API
/// client exposes it only at the transmission boundary.
#[derive(Debug)]
pub struct SignupProfile {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Plaintext password, kept wrapped until the request is built.
    pub password: SecretString,
}

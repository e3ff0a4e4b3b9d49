//! Backend API surface.
//!
//! The rest of the library is written against the [`CookieApi`] and
//! [`AuthApi`] traits rather than a concrete client, so tests substitute an
//! in-memory fake and no module-level singleton exists. [`RestClient`] is
//! the production implementation.

mod rest;

pub use rest::RestClient;

use secrecy::SecretString;
use thiserror::Error;

use moon_cookies_core::CookieId;

use crate::models::{Cookie, CookiePayload, SignupProfile, User};

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the credentials or token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success response.
    #[error("backend returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },
}

/// Operations on the cookie collection.
///
/// All calls suspend the triggering interaction but never block unrelated
/// work; the client model is single-threaded, so no `Send` bound is
/// required on the returned futures.
#[allow(async_fn_in_trait)]
pub trait CookieApi {
    /// Fetch all cookies with the owner relation expanded, newest first.
    async fn list_cookies(&self) -> Result<Vec<Cookie>, ApiError>;

    /// Persist a new cookie; the returned record carries the server-assigned
    /// id and timestamp.
    async fn create_cookie(&self, payload: &CookiePayload) -> Result<Cookie, ApiError>;

    /// Overwrite an existing cookie. Last write wins; there is no version
    /// check.
    async fn update_cookie(&self, id: CookieId, payload: &CookiePayload)
    -> Result<Cookie, ApiError>;

    /// Delete a cookie. The acknowledgment carries no body.
    async fn delete_cookie(&self, id: CookieId) -> Result<(), ApiError>;
}

/// Authentication and connectivity operations.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Probe backend reachability. Performed once at startup to drive the
    /// connectivity indicator.
    async fn health(&self) -> Result<(), ApiError>;

    /// Resolve the current identity, failing when unauthenticated.
    async fn me(&self) -> Result<User, ApiError>;

    /// Authenticate and retain the session token for subsequent calls.
    async fn login(&self, email: &str, password: &SecretString) -> Result<(), ApiError>;

    /// Discard the session.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Register a new customer account. Does not authenticate; callers chain
    /// [`AuthApi::login`] on success.
    async fn signup(&self, profile: &SignupProfile) -> Result<(), ApiError>;
}

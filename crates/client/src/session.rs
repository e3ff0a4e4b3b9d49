//! Identity and connectivity.
//!
//! Owns the current user and the "backend reachable" flag. Bootstraps once
//! at startup: probe the backend, then try to resume an existing session.
//! An unresolved identity is simply "no session", never a reportable
//! error.

use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ApiError, AuthApi};
use crate::models::{SignupProfile, User};

/// Authentication failures surfaced to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup rejected; the email is most likely already registered.
    #[error("email already in use")]
    DuplicateEmail,

    /// Any other backend failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The client's identity and authorization mode.
///
/// Replaced wholesale on login/logout; the components that gate on role and
/// ownership consult [`current_user`](Self::current_user).
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    connected: bool,
}

impl Session {
    /// Create an unauthenticated, unprobed session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the backend and try to resume an existing identity.
    ///
    /// A failed probe leaves the session disconnected but the app usable;
    /// identity resolution is only attempted against a reachable backend,
    /// and its failure just means no one is logged in.
    pub async fn bootstrap<A: AuthApi>(&mut self, api: &A) {
        self.connected = match api.health().await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "backend connection failed");
                false
            }
        };

        if !self.connected {
            return;
        }

        match api.me().await {
            Ok(user) => {
                debug!(email = %user.email, "resumed active session");
                self.user = Some(user);
            }
            Err(_) => {
                debug!("no active user session");
                self.user = None;
            }
        }
    }

    /// Authenticate and resolve the resulting identity.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the backend rejects the
    /// credentials; any other failure passes through as
    /// [`AuthError::Api`]. The session is unchanged on failure.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        email: &str,
        password: &SecretString,
    ) -> Result<&User, AuthError> {
        api.login(email, password).await.map_err(|error| match error {
            ApiError::Unauthorized(_) => AuthError::InvalidCredentials,
            other => AuthError::Api(other),
        })?;

        let user = api.me().await?;
        Ok(self.user.insert(user))
    }

    /// Register a new customer account, then log in with the same
    /// credentials.
    ///
    /// # Errors
    ///
    /// [`AuthError::DuplicateEmail`] when the backend rejects the signup
    /// (no login is attempted in that case); otherwise any login error.
    pub async fn signup<A: AuthApi>(
        &mut self,
        api: &A,
        profile: &SignupProfile,
    ) -> Result<&User, AuthError> {
        api.signup(profile).await.map_err(|error| match error {
            ApiError::Unauthorized(_)
            | ApiError::Status {
                status: 400..=499, ..
            } => AuthError::DuplicateEmail,
            other => AuthError::Api(other),
        })?;

        self.login(api, profile.email.as_str(), &profile.password)
            .await
    }

    /// Discard the session and route back to the unauthenticated state.
    ///
    /// # Errors
    ///
    /// Passes through backend failures; the identity is kept in that case.
    pub async fn logout<A: AuthApi>(&mut self, api: &A) -> Result<(), AuthError> {
        api.logout().await?;
        self.user = None;
        Ok(())
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the startup probe reached the backend.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

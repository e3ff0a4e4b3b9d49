//! CLI commands and shared session plumbing.

pub mod account;
pub mod catalog;
pub mod status;

use secrecy::SecretString;
use thiserror::Error;

use moon_cookies_client::{
    AuthError, ClientConfig, ConfigError, DraftError, RestClient, Session, SubmitError,
};
use moon_cookies_core::{BakingStatusError, CookieId, EmailError};

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The startup probe could not reach the backend.
    #[error("Backend is unreachable; check MOONBASE_BACKEND_URL")]
    Disconnected,

    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Bad email input.
    #[error(transparent)]
    Email(#[from] EmailError),

    /// Bad baking status input.
    #[error(transparent)]
    Status(#[from] BakingStatusError),

    /// Credentials rejected.
    #[error("Login failed. Please check your credentials.")]
    LoginFailed(#[source] AuthError),

    /// Signup rejected.
    #[error("Signup failed. The email might already be in use.")]
    SignupFailed(#[source] AuthError),

    /// The requested cookie is not in the catalog.
    #[error("No cookie with id {0}")]
    UnknownCookie(CookieId),

    /// The action is not offered to the current user.
    #[error("{0}")]
    NotPermitted(&'static str),

    /// The draft did not validate.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// A create/update submission failed.
    #[error("Failed to save cookie: {0}")]
    Save(#[source] SubmitError),

    /// A delete submission failed.
    #[error("Could not delete cookie.")]
    Delete(#[source] SubmitError),
}

/// Read credentials from the environment.
pub(crate) fn credentials() -> Result<(String, SecretString), CliError> {
    let email =
        std::env::var("MOONBASE_EMAIL").map_err(|_| CliError::MissingEnvVar("MOONBASE_EMAIL"))?;
    let password = std::env::var("MOONBASE_PASSWORD")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("MOONBASE_PASSWORD"))?;
    Ok((email, password))
}

/// Build a client and bootstrap a session, requiring a reachable backend.
pub(crate) async fn connect() -> Result<(RestClient, Session), CliError> {
    let config = ClientConfig::from_env()?;
    let api = RestClient::new(&config);

    let mut session = Session::new();
    session.bootstrap(&api).await;
    if !session.is_connected() {
        return Err(CliError::Disconnected);
    }

    Ok((api, session))
}

/// Connect and log in with the environment credentials.
pub(crate) async fn authenticate() -> Result<(RestClient, Session), CliError> {
    let (api, mut session) = connect().await?;
    let (email, password) = credentials()?;
    session
        .login(&api, &email, &password)
        .await
        .map_err(CliError::LoginFailed)?;
    Ok((api, session))
}

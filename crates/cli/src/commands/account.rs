//! Account management commands.

use secrecy::SecretString;
use tracing::info;

use moon_cookies_client::SignupProfile;
use moon_cookies_core::Email;

use super::{CliError, connect};

/// Create a customer account and log straight in with the same
/// credentials.
///
/// # Errors
///
/// Returns [`CliError::SignupFailed`] when the backend rejects the signup
/// (most often a duplicate email); no login is attempted in that case.
pub async fn signup(name: &str, email: &str, password: Option<String>) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let password = match password {
        Some(password) => SecretString::from(password),
        None => std::env::var("MOONBASE_PASSWORD")
            .map(SecretString::from)
            .map_err(|_| CliError::MissingEnvVar("MOONBASE_PASSWORD"))?,
    };

    let (api, mut session) = connect().await?;
    let profile = SignupProfile {
        name: name.to_string(),
        email,
        password,
    };

    let user = session
        .signup(&api, &profile)
        .await
        .map_err(CliError::SignupFailed)?;

    info!("Welcome aboard, {}! You are signed up as a {}.", user.name, user.role);
    Ok(())
}

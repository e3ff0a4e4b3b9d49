//! Connectivity probe and session overview.

use tracing::info;

use moon_cookies_client::{ClientConfig, RestClient, Session};

use super::{CliError, credentials};

/// Probe the backend and, when credentials are configured, show who they
/// belong to.
///
/// # Errors
///
/// Returns an error only for configuration problems; an unreachable
/// backend is reported as a status line, mirroring the app's connectivity
/// indicator.
pub async fn run() -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let api = RestClient::new(&config);

    let mut session = Session::new();
    session.bootstrap(&api).await;

    if session.is_connected() {
        info!("Connected to {}", config.base_url);
    } else {
        info!("Disconnected ({})", config.base_url);
        return Ok(());
    }

    match credentials() {
        Ok((email, password)) => match session.login(&api, &email, &password).await {
            Ok(user) => info!("Logged in as {} ({})", user.name, user.role),
            Err(_) => info!("Credentials configured for {email}, but login failed"),
        },
        Err(_) => info!("No credentials configured; set MOONBASE_EMAIL and MOONBASE_PASSWORD"),
    }

    Ok(())
}

//! Integration tests for the Moon Cookies client.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend, then:
//! MOONBASE_BACKEND_URL=http://localhost:1111 cargo test -p moon-cookies-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they need a running backend
//! with signup enabled. Astronaut-only flows additionally need
//! `MOONBASE_ASTRONAUT_EMAIL` / `MOONBASE_ASTRONAUT_PASSWORD` pointing at a
//! provisioned astronaut account - the client can only sign up customers.

#![cfg_attr(not(test), forbid(unsafe_code))]

use moon_cookies_client::{ClientConfig, RestClient};
use url::Url;

/// Base URL for the backend (configurable via environment).
#[must_use]
pub fn backend_url() -> Url {
    std::env::var("MOONBASE_BACKEND_URL")
        .ok()
        .and_then(|raw| Url::parse(&raw).ok())
        .unwrap_or_else(|| {
            Url::parse(moon_cookies_client::config::DEFAULT_BACKEND_URL)
                .expect("default backend URL is valid")
        })
}

/// A fresh client against the configured backend.
#[must_use]
pub fn client() -> RestClient {
    RestClient::new(&ClientConfig::new(backend_url()))
}

/// An email address that will not collide with earlier test runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@moonbase.example", uuid::Uuid::new_v4())
}

//! REST implementation of the backend API.
//!
//! Speaks the backend's conventions: collection endpoints under
//! `/api/collections`, token auth under `/api/auth/users`, and a health
//! probe at `/api/health`. Create and update switch to multipart when the
//! payload carries an attachment, which is how the binary photo travels.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use moon_cookies_core::{CookieId, Role};

use crate::api::{ApiError, AuthApi, CookieApi};
use crate::config::ClientConfig;
use crate::draft::Attachment;
use crate::models::{Cookie, CookiePayload, SignupProfile, User};

/// Paginated collection envelope returned by list endpoints.
#[derive(Debug, serde::Deserialize)]
struct Paginated<T> {
    data: Vec<T>,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    token: String,
}

// =============================================================================
// RestClient
// =============================================================================

/// HTTP client for the Moon Cookies backend.
///
/// Cheap to clone; the session token acquired by [`AuthApi::login`] is held
/// in memory and shared between clones. Construct one per backend and pass
/// it to the components that need it - never a module-level singleton.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl RestClient {
    /// Create a new client for the configured backend.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(RestClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(None),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Attach the bearer token when a session is active.
    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.inner.token.read().await.as_ref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Build the multipart form for a payload carrying an attachment.
    fn multipart(payload: &CookiePayload, attachment: &Attachment) -> Result<Form, ApiError> {
        let photo = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)?;

        Ok(Form::new()
            .text("name", payload.name.clone())
            .text("description", payload.description.clone())
            .text("price", payload.price.amount().to_string())
            .text("inventory", payload.inventory.to_string())
            .text("bakingStatus", payload.baking_status.as_str())
            .text("ownerId", payload.owner_id.to_string())
            .part("photo", photo))
    }

    /// Send a create/update request, as JSON or multipart depending on
    /// whether an attachment was chosen.
    async fn send_payload(
        &self,
        builder: RequestBuilder,
        payload: &CookiePayload,
    ) -> Result<Cookie, ApiError> {
        let builder = match payload.attachment.as_ref() {
            Some(attachment) => builder.multipart(Self::multipart(payload, attachment)?),
            None => builder.json(payload),
        };

        let response = self.authorized(builder).await.send().await?;
        read_json(check_status(response).await?).await
    }
}

/// Map a non-success response to an [`ApiError`], preserving a truncated
/// body for diagnostics.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message: String = response
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(200)
        .collect();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized(message));
    }

    tracing::error!(
        status = %status,
        body = %message,
        "backend returned non-success status"
    );
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Read a response body as JSON, logging the raw body on parse failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|error| {
        tracing::error!(
            %error,
            body = %body.chars().take(500).collect::<String>(),
            "failed to parse backend response"
        );
        ApiError::Parse(error)
    })
}

impl CookieApi for RestClient {
    #[instrument(skip(self))]
    async fn list_cookies(&self) -> Result<Vec<Cookie>, ApiError> {
        let builder = self
            .inner
            .http
            .get(self.endpoint("api/collections/cookies"))
            .query(&[
                ("relations", "owner"),
                ("orderBy", "createdAt"),
                ("order", "DESC"),
            ]);

        let response = self.authorized(builder).await.send().await?;
        let page: Paginated<Cookie> = read_json(check_status(response).await?).await?;
        debug!(count = page.data.len(), "fetched cookie collection");
        Ok(page.data)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_cookie(&self, payload: &CookiePayload) -> Result<Cookie, ApiError> {
        let builder = self.inner.http.post(self.endpoint("api/collections/cookies"));
        self.send_payload(builder, payload).await
    }

    #[instrument(skip(self, payload), fields(id = %id))]
    async fn update_cookie(
        &self,
        id: CookieId,
        payload: &CookiePayload,
    ) -> Result<Cookie, ApiError> {
        let builder = self
            .inner
            .http
            .put(self.endpoint(&format!("api/collections/cookies/{id}")));
        self.send_payload(builder, payload).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_cookie(&self, id: CookieId) -> Result<(), ApiError> {
        let builder = self
            .inner
            .http
            .delete(self.endpoint(&format!("api/collections/cookies/{id}")));

        let response = self.authorized(builder).await.send().await?;
        check_status(response).await?;
        Ok(())
    }
}

impl AuthApi for RestClient {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .inner
            .http
            .get(self.endpoint("api/health"))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn me(&self) -> Result<User, ApiError> {
        let builder = self.inner.http.get(self.endpoint("api/auth/users/me"));
        let response = self.authorized(builder).await.send().await?;
        read_json(check_status(response).await?).await
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &SecretString) -> Result<(), ApiError> {
        let response = self
            .inner
            .http
            .post(self.endpoint("api/auth/users/login"))
            .json(&json!({
                "email": email,
                "password": password.expose_secret(),
            }))
            .send()
            .await?;

        let token: TokenResponse = read_json(check_status(response).await?).await?;
        *self.inner.token.write().await = Some(token.token);
        Ok(())
    }

    /// Sessions are stateless tokens; logout discards the local one.
    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), ApiError> {
        *self.inner.token.write().await = None;
        Ok(())
    }

    #[instrument(skip(self, profile), fields(email = %profile.email))]
    async fn signup(&self, profile: &SignupProfile) -> Result<(), ApiError> {
        let response = self
            .inner
            .http
            .post(self.endpoint("api/auth/users/signup"))
            .json(&json!({
                "name": profile.name,
                "email": profile.email,
                "password": profile.password.expose_secret(),
                "role": Role::Customer,
            }))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let config = ClientConfig::new("http://localhost:1111/".parse().unwrap());
        let client = RestClient::new(&config);
        assert_eq!(
            client.endpoint("api/health"),
            "http://localhost:1111/api/health"
        );
    }
}

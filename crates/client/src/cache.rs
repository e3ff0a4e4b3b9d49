//! In-memory mirror of the backend's cookie collection.

use tracing::warn;

use moon_cookies_core::CookieId;

use crate::api::CookieApi;
use crate::models::Cookie;

/// Ordered mirror of the cookie collection for the active session.
///
/// Order is newest-first as loaded; locally created entries are inserted at
/// the front regardless of their server timestamp so perceived ordering
/// stays stable without a refetch. Never holds two entries with the same
/// id.
///
/// Mutations flow exclusively through [`load`](Self::load),
/// [`insert_front`](Self::insert_front), [`replace`](Self::replace), and
/// [`remove`](Self::remove); the reconciler calls the last three only after
/// the backend has acknowledged the corresponding write.
#[derive(Debug, Default)]
pub struct CookieCache {
    cookies: Vec<Cookie>,
    loading: bool,
}

impl CookieCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents from the backend.
    ///
    /// The loading flag is set for the duration of the call. A failed fetch
    /// is logged and leaves the previous contents untouched - the UI keeps
    /// whatever it had and stays interactive. Suppressing a second load
    /// while one is in flight is the caller's job, not the cache's.
    pub async fn load<A: CookieApi>(&mut self, api: &A) {
        self.loading = true;
        match api.list_cookies().await {
            Ok(cookies) => self.cookies = cookies,
            Err(error) => warn!(%error, "failed to load cookies"),
        }
        self.loading = false;
    }

    /// Prepend a newly created cookie.
    ///
    /// The caller guarantees the id is not already present (the reconciler
    /// only inserts entities the backend just created).
    pub fn insert_front(&mut self, cookie: Cookie) {
        debug_assert!(
            self.cookies.iter().all(|existing| existing.id != cookie.id),
            "duplicate cookie id inserted into cache"
        );
        self.cookies.insert(0, cookie);
    }

    /// Replace the entry matching `id` in place, preserving its position.
    /// No-op if the id is not present.
    pub fn replace(&mut self, id: CookieId, cookie: Cookie) {
        if let Some(slot) = self.cookies.iter_mut().find(|existing| existing.id == id) {
            *slot = cookie;
        }
    }

    /// Remove the entry matching `id`. No-op if absent.
    pub fn remove(&mut self, id: CookieId) {
        self.cookies.retain(|existing| existing.id != id);
    }

    /// All cookies, newest first.
    #[must_use]
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Look up a cookie by id.
    #[must_use]
    pub fn get(&self, id: CookieId) -> Option<&Cookie> {
        self.cookies.iter().find(|cookie| cookie.id == id)
    }

    /// Number of cached cookies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the cache holds no cookies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Whether a load is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

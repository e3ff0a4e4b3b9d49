//! Dashboard view state.

use tracing::debug;

use crate::api::CookieApi;
use crate::cache::CookieCache;

/// Owner of the [`CookieCache`] for a presentation layer.
///
/// The cache itself does not guard against overlapping loads; that duty
/// sits here: [`refresh`](Self::refresh) skips when a load is already in
/// flight, so a re-triggered dashboard never issues a second concurrent
/// fetch.
#[derive(Debug, Default)]
pub struct Dashboard {
    cache: CookieCache,
}

impl Dashboard {
    /// Create a dashboard with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the catalog, unless a load is already in flight.
    pub async fn refresh<A: CookieApi>(&mut self, api: &A) {
        if self.cache.is_loading() {
            debug!("cookie load already in flight, skipping");
            return;
        }
        self.cache.load(api).await;
    }

    /// Read access to the catalog mirror.
    #[must_use]
    pub const fn cache(&self) -> &CookieCache {
        &self.cache
    }

    /// Mutable access for the reconciler operations.
    pub const fn cache_mut(&mut self) -> &mut CookieCache {
        &mut self.cache
    }
}

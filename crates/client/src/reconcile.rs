//! Mutation reconciliation.
//!
//! Translates a confirmed user mutation into a network call and the
//! matching cache update. The flow is confirmation-first, not optimistic:
//! the cache is only touched after the backend acknowledges, so a failed
//! call needs no rollback - local state simply never changed.

use std::cell::Cell;

use thiserror::Error;
use tracing::error;

use moon_cookies_core::CookieId;

use crate::api::{ApiError, CookieApi};
use crate::cache::CookieCache;
use crate::models::{Cookie, CookiePayload};

/// Errors from a submission attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Another submission from this instance is still in flight.
    #[error("a submission is already in flight")]
    InFlight,

    /// The backend call failed; the cache and the draft are unchanged and
    /// the user may retry.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed, acknowledged by the backend, removed from the cache.
    Deleted,
    /// The user declined the confirmation; nothing happened.
    Declined,
}

/// Blocking yes/no gate consulted before a delete call goes out.
///
/// Implemented by the presentation layer (a modal dialog, a terminal
/// prompt); tests use a closure.
pub trait ConfirmDelete {
    /// Whether the user confirmed deleting `cookie`.
    fn confirm(&self, cookie: &Cookie) -> bool;
}

impl<F: Fn(&Cookie) -> bool> ConfirmDelete for F {
    fn confirm(&self, cookie: &Cookie) -> bool {
        self(cookie)
    }
}

/// Orchestrates create/update/delete for one draft form.
///
/// Holds the per-instance re-entrancy guard: at most one submission is in
/// flight at a time, and [`is_submitting`](Self::is_submitting) is true for
/// the duration so the presentation layer can disable its submit control.
/// Independent instances are not serialized against each other - for a
/// given id, the last write to reach the cache wins.
///
/// Uses interior mutability for the guard and so is intentionally not
/// `Sync`; the client model is single-threaded.
#[derive(Debug, Default)]
pub struct Reconciler {
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when a submission ends, however it ends.
struct Flight<'a>(&'a Cell<bool>);

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Reconciler {
    /// Create an idle reconciler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    fn begin(&self) -> Result<Flight<'_>, SubmitError> {
        if self.in_flight.get() {
            return Err(SubmitError::InFlight);
        }
        self.in_flight.set(true);
        Ok(Flight(&self.in_flight))
    }

    /// Create a new cookie.
    ///
    /// On success the returned entity (with its server-assigned id and
    /// timestamp) is inserted at the front of the cache and the create form
    /// should close. On failure nothing local changes; the draft is
    /// preserved so the user can retry.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] if this instance is already submitting;
    /// [`SubmitError::Api`] when the backend call fails.
    pub async fn submit_create<A: CookieApi>(
        &self,
        api: &A,
        cache: &mut CookieCache,
        payload: &CookiePayload,
    ) -> Result<Cookie, SubmitError> {
        let _flight = self.begin()?;

        match api.create_cookie(payload).await {
            Ok(cookie) => {
                cache.insert_front(cookie.clone());
                Ok(cookie)
            }
            Err(err) => {
                error!(error = %err, "failed to save cookie");
                Err(err.into())
            }
        }
    }

    /// Overwrite an existing cookie.
    ///
    /// On success the cache entry is replaced in place, preserving its
    /// position. On failure nothing local changes and the edit form stays
    /// open.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] if this instance is already submitting;
    /// [`SubmitError::Api`] when the backend call fails.
    pub async fn submit_update<A: CookieApi>(
        &self,
        api: &A,
        cache: &mut CookieCache,
        id: CookieId,
        payload: &CookiePayload,
    ) -> Result<Cookie, SubmitError> {
        let _flight = self.begin()?;

        match api.update_cookie(id, payload).await {
            Ok(cookie) => {
                cache.replace(id, cookie.clone());
                Ok(cookie)
            }
            Err(err) => {
                error!(error = %err, "failed to save cookie");
                Err(err.into())
            }
        }
    }

    /// Delete a cookie, gated on explicit user confirmation.
    ///
    /// A declined confirmation is a complete no-op: no network call, no
    /// cache change. On confirmed success the entry is removed; on failure
    /// the entry stays and no retry is attempted.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] if this instance is already submitting;
    /// [`SubmitError::Api`] when the backend call fails.
    pub async fn submit_delete<A: CookieApi, G: ConfirmDelete>(
        &self,
        api: &A,
        cache: &mut CookieCache,
        gate: &G,
        cookie: &Cookie,
    ) -> Result<DeleteOutcome, SubmitError> {
        if !gate.confirm(cookie) {
            return Ok(DeleteOutcome::Declined);
        }

        let _flight = self.begin()?;

        match api.delete_cookie(cookie.id).await {
            Ok(()) => {
                cache.remove(cookie.id);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!(error = %err, "failed to delete cookie");
                Err(err.into())
            }
        }
    }
}

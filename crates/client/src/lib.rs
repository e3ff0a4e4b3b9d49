//! Moon Cookies client library.
//!
//! Keeps an in-memory mirror of the backend's cookie catalog consistent with
//! user-initiated create/update/delete actions without a full reload, gates
//! which mutations are offered by role and ownership, and manages the
//! lifecycle of a dual-purpose (create vs. edit) draft including local
//! preview of an unsent attachment.
//!
//! # Architecture
//!
//! - [`api`] - Backend surface: the [`CookieApi`]/[`AuthApi`] traits and the
//!   `reqwest`-backed [`RestClient`]. Everything else is written against the
//!   traits so tests can substitute a fake.
//! - [`cache`] - Ordered in-memory mirror of the cookie collection.
//! - [`draft`] - Working copy of a cookie being created or edited, plus the
//!   pending attachment and its data-URL preview.
//! - [`reconcile`] - Turns a confirmed user mutation into a network call and
//!   the matching cache update. The cache is only touched after the backend
//!   acknowledges; a failed call leaves local state exactly as it was.
//! - [`policy`] - Pure role/ownership gates consulted by presentation and
//!   reconciliation alike.
//! - [`session`] - Identity and connectivity: startup probe, login, signup,
//!   logout.
//! - [`dashboard`] - Thin owner of the cache for a presentation layer;
//!   suppresses overlapping loads.
//!
//! # Example
//!
//! ```rust,ignore
//! use moon_cookies_client::{ClientConfig, CookieDraft, Dashboard, Reconciler, RestClient, Session};
//!
//! let config = ClientConfig::from_env()?;
//! let api = RestClient::new(&config);
//!
//! let mut session = Session::new();
//! session.bootstrap(&api).await;
//! let user = session.login(&api, "astro@moonbase.example", &password).await?;
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.refresh(&api).await;
//!
//! let mut draft = CookieDraft::new();
//! draft.set_name("Lunar Crunch");
//! draft.set_price("3.00");
//! let payload = draft.to_payload(user.id)?;
//! Reconciler::new().submit_create(&api, dashboard.cache_mut(), &payload).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod models;
pub mod policy;
pub mod reconcile;
pub mod session;

pub use api::{ApiError, AuthApi, CookieApi, RestClient};
pub use cache::CookieCache;
pub use config::{ClientConfig, ConfigError};
pub use dashboard::Dashboard;
pub use draft::{Attachment, CookieDraft, DraftError};
pub use models::{Cookie, CookiePayload, Photo, SignupProfile, User};
pub use policy::{can_create, can_mutate};
pub use reconcile::{ConfirmDelete, DeleteOutcome, Reconciler, SubmitError};
pub use session::{AuthError, Session};

//! Wire records exchanged with the backend.
//!
//! These are the JSON shapes the backend speaks (camelCase field names),
//! built on the validated newtypes from `moon-cookies-core`.

pub mod cookie;
pub mod user;

pub use cookie::{Cookie, CookiePayload, ImageVariant, PLACEHOLDER_PHOTO_URL, Photo};
pub use user::{SignupProfile, User};

//! Cookie records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_cookies_core::{BakingStatus, CookieId, Price, UserId};

use crate::draft::Attachment;
use crate::models::User;

/// Image shown for cookies that have no uploaded photo yet.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://placehold.co/400x400/0f172a/FFF?text=Moon+Cookie";

/// A cookie as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Server-assigned id; drafts have none until first persisted.
    pub id: CookieId,
    /// Non-empty display name.
    pub name: String,
    /// May be empty.
    #[serde(default)]
    pub description: String,
    /// Non-negative USD price.
    pub price: Price,
    /// Units in stock.
    pub inventory: u32,
    /// Where the cookie is in the baking lifecycle.
    #[serde(default)]
    pub baking_status: BakingStatus,
    /// Present once an attachment has been uploaded and server-processed.
    #[serde(default)]
    pub photo: Option<Photo>,
    /// The creating user; populated when the listing expands the relation.
    #[serde(default)]
    pub owner: Option<User>,
    /// Server-assigned; used only for default ordering.
    pub created_at: DateTime<Utc>,
}

impl Cookie {
    /// URL to render for this cookie's image, falling back to the
    /// placeholder when no photo has been uploaded.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        self.photo
            .as_ref()
            .map_or(PLACEHOLDER_PHOTO_URL, |photo| photo.thumbnail.url.as_str())
    }
}

/// Server-processed photo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Sized-down rendition usable directly as an image source.
    pub thumbnail: ImageVariant,
}

/// One rendition of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    /// Absolute URL of the rendition.
    pub url: String,
}

/// Submission record produced by a draft.
///
/// Scalars are already coerced to their numeric types; the attachment, if
/// any, travels out of band as a multipart file field rather than in the
/// JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookiePayload {
    /// Non-empty display name.
    pub name: String,
    /// May be empty.
    pub description: String,
    /// Coerced, non-negative price.
    pub price: Price,
    /// Coerced, non-negative stock count.
    pub inventory: u32,
    /// Selected lifecycle state.
    pub baking_status: BakingStatus,
    /// The submitting user; ownership is fixed at creation.
    pub owner_id: UserId,
    /// Unsent binary attachment, if one was chosen.
    #[serde(skip)]
    pub attachment: Option<Attachment>,
}

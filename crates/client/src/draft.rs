//! Working copy of a cookie being created or edited.
//!
//! A draft holds raw field input exactly as the user typed it; coercion and
//! validation happen once, at [`CookieDraft::to_payload`], so a half-typed
//! price never aborts editing. The pending attachment is read and previewed
//! locally - nothing touches the network until the reconciler submits the
//! payload.

use std::io;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

use moon_cookies_core::{BakingStatus, CookieId, Price, PriceError, UserId};

use crate::models::{Cookie, CookiePayload};

/// Errors reported when a draft cannot be turned into a submission payload
/// or an attachment cannot be read.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The name field is empty.
    #[error("cookie name cannot be empty")]
    EmptyName,

    /// The price field does not parse as a non-negative decimal.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    /// The inventory field does not parse as a non-negative integer.
    #[error("{0:?} is not a valid inventory count")]
    Inventory(String),

    /// The attachment file could not be read.
    #[error("could not read attachment: {0}")]
    Attachment(#[from] io::Error),
}

/// An unsent binary attachment chosen for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name, sent with the multipart part.
    pub file_name: String,
    /// MIME type guessed from the file extension.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read an attachment from disk.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading the file.
    pub async fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "attachment".to_string(), |name| name.to_string_lossy().into_owned());

        Ok(Self {
            content_type: guess_content_type(path),
            file_name,
            bytes,
        })
    }

    /// Encode as a `data:` URL usable directly as an image source.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64.encode(&self.bytes)
        )
    }
}

fn guess_content_type(path: &Path) -> String {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// A single working copy of a cookie, new or being edited.
///
/// Seed with [`new`](Self::new) when creating or [`edit`](Self::edit) when
/// editing an existing cookie. Scalar setters perform no validation;
/// everything is checked at [`to_payload`](Self::to_payload), before any
/// network call.
#[derive(Debug, Clone)]
pub struct CookieDraft {
    target: Option<CookieId>,
    name: String,
    description: String,
    price: String,
    inventory: String,
    baking_status: BakingStatus,
    attachment: Option<Attachment>,
    preview: Option<String>,
    existing_thumbnail: Option<String>,
}

impl Default for CookieDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieDraft {
    /// Start a fresh draft with field defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            name: String::new(),
            description: String::new(),
            price: "0".to_string(),
            inventory: "0".to_string(),
            baking_status: BakingStatus::default(),
            attachment: None,
            preview: None,
            existing_thumbnail: None,
        }
    }

    /// Start a draft seeded from an existing cookie.
    ///
    /// The cookie's current thumbnail serves as the preview until a new
    /// attachment is chosen.
    #[must_use]
    pub fn edit(cookie: &Cookie) -> Self {
        Self {
            target: Some(cookie.id),
            name: cookie.name.clone(),
            description: cookie.description.clone(),
            price: cookie.price.amount().to_string(),
            inventory: cookie.inventory.to_string(),
            baking_status: cookie.baking_status,
            attachment: None,
            preview: None,
            existing_thumbnail: cookie
                .photo
                .as_ref()
                .map(|photo| photo.thumbnail.url.clone()),
        }
    }

    /// The cookie this draft edits, if any. `None` means the draft creates.
    #[must_use]
    pub const fn editing(&self) -> Option<CookieId> {
        self.target
    }

    /// Assign the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Assign the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Assign the price field as raw input text.
    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    /// Assign the inventory field as raw input text.
    pub fn set_inventory(&mut self, inventory: impl Into<String>) {
        self.inventory = inventory.into();
    }

    /// Select a baking status. Single-select: choosing one deselects the
    /// previous choice.
    pub fn set_baking_status(&mut self, status: BakingStatus) {
        self.baking_status = status;
    }

    /// Currently selected baking status.
    #[must_use]
    pub const fn baking_status(&self) -> BakingStatus {
        self.baking_status
    }

    /// Choose an attachment and derive its preview in one async step
    /// (read, then encode).
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Attachment`] when the file cannot be read; the
    /// previously chosen attachment, if any, is kept.
    pub async fn set_attachment(&mut self, path: impl AsRef<Path>) -> Result<(), DraftError> {
        let attachment = Attachment::read(path).await?;
        self.preview = Some(attachment.to_data_url());
        self.attachment = Some(attachment);
        Ok(())
    }

    /// The image to show for this draft: the data-URL of a newly chosen
    /// attachment, else the existing thumbnail when editing, else nothing.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview
            .as_deref()
            .or(self.existing_thumbnail.as_deref())
    }

    /// Produce the submission payload, coercing and validating field input.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when the name is empty or price/inventory do
    /// not parse; nothing is transmitted in that case.
    pub fn to_payload(&self, owner_id: UserId) -> Result<CookiePayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        let price = Price::parse(&self.price)?;
        let inventory = self
            .inventory
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::Inventory(self.inventory.clone()))?;

        Ok(CookiePayload {
            name: name.to_string(),
            description: self.description.clone(),
            price,
            inventory,
            baking_status: self.baking_status,
            owner_id,
            attachment: self.attachment.clone(),
        })
    }
}

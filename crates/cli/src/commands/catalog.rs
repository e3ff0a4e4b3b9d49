//! Catalog commands: list, bake, update, jettison.

use std::io::Write as _;
use std::path::PathBuf;

use tracing::info;

use moon_cookies_client::{
    ConfirmDelete, Cookie, CookieCache, CookieDraft, Dashboard, DeleteOutcome, Reconciler,
    RestClient, Session, can_create, can_mutate,
};
use moon_cookies_core::{BakingStatus, CookieId};

use super::{CliError, authenticate};

/// Optional field overrides for `update`.
#[derive(Debug, Default)]
pub struct FieldEdits {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub inventory: Option<String>,
    pub status: Option<String>,
    pub photo: Option<PathBuf>,
}

/// Interactive y/N gate for jettisoning, in the spirit of the dashboard's
/// confirmation dialog.
struct TerminalPrompt {
    assume_yes: bool,
}

impl ConfirmDelete for TerminalPrompt {
    // stderr keeps the prompt out of any piped stdout
    #[allow(clippy::print_stderr)]
    fn confirm(&self, cookie: &Cookie) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!(
            "Are you sure you want to jettison {:?} into space? [y/N] ",
            cookie.name
        );
        if std::io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Show the catalog, newest first, with ownership markers.
///
/// # Errors
///
/// Returns an error when the backend is unreachable or login fails.
pub async fn list() -> Result<(), CliError> {
    let (api, session) = authenticate().await?;

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&api).await;

    let viewer = session.current_user();
    let cache = dashboard.cache();

    if cache.is_empty() {
        info!("No cookies found. Looks like the ovens are cold.");
    }

    for cookie in cache.cookies() {
        let baker = cookie
            .owner
            .as_ref()
            .map_or("unknown", |owner| owner.name.as_str());
        let yours = if can_mutate(viewer, cookie) { " (yours)" } else { "" };
        info!(
            "#{} {} - {} - {} in stock - {} - baked by {}{}",
            cookie.id,
            cookie.name,
            cookie.price,
            cookie.inventory,
            cookie.baking_status,
            baker,
            yours,
        );
    }

    if can_create(viewer) {
        info!("Use `mc-cli bake` to add a cookie.");
    }

    Ok(())
}

/// Bake (create) a new cookie.
///
/// # Errors
///
/// Returns an error when the user is not an astronaut, the draft does not
/// validate, or the backend rejects the create.
pub async fn bake(
    name: &str,
    description: &str,
    price: &str,
    inventory: &str,
    status: &str,
    photo: Option<PathBuf>,
) -> Result<(), CliError> {
    let (api, session) = authenticate().await?;

    let Some(user) = session.current_user() else {
        return Err(CliError::NotPermitted("Only astronauts can bake cookies."));
    };
    if !can_create(Some(user)) {
        return Err(CliError::NotPermitted("Only astronauts can bake cookies."));
    }

    let mut draft = CookieDraft::new();
    draft.set_name(name);
    draft.set_description(description);
    draft.set_price(price);
    draft.set_inventory(inventory);
    draft.set_baking_status(status.parse::<BakingStatus>()?);
    if let Some(path) = photo {
        draft.set_attachment(&path).await?;
    }
    let payload = draft.to_payload(user.id)?;

    let mut cache = CookieCache::new();
    let created = Reconciler::new()
        .submit_create(&api, &mut cache, &payload)
        .await
        .map_err(CliError::Save)?;

    info!("Baked cookie #{}: {} at {}", created.id, created.name, created.price);
    Ok(())
}

/// Edit one of your cookies, re-submitting the merged draft.
///
/// # Errors
///
/// Returns an error when the cookie is missing, not yours, the draft does
/// not validate, or the backend rejects the update.
pub async fn update(id: i32, edits: FieldEdits) -> Result<(), CliError> {
    let id = CookieId::new(id);
    let (api, session, mut dashboard, cookie) = fetch_owned(id).await?;

    let mut draft = CookieDraft::edit(&cookie);
    if let Some(name) = edits.name {
        draft.set_name(name);
    }
    if let Some(description) = edits.description {
        draft.set_description(description);
    }
    if let Some(price) = edits.price {
        draft.set_price(price);
    }
    if let Some(inventory) = edits.inventory {
        draft.set_inventory(inventory);
    }
    if let Some(status) = edits.status {
        draft.set_baking_status(status.parse::<BakingStatus>()?);
    }
    if let Some(path) = edits.photo {
        draft.set_attachment(&path).await?;
    }

    let owner_id = session
        .current_user()
        .map(|user| user.id)
        .ok_or(CliError::NotPermitted("You can only modify cookies you baked."))?;
    let payload = draft.to_payload(owner_id)?;

    let updated = Reconciler::new()
        .submit_update(&api, dashboard.cache_mut(), id, &payload)
        .await
        .map_err(CliError::Save)?;

    info!("Updated cookie #{}: {} at {}", updated.id, updated.name, updated.price);
    Ok(())
}

/// Jettison (delete) one of your cookies, after confirmation.
///
/// # Errors
///
/// Returns an error when the cookie is missing, not yours, or the backend
/// rejects the delete.
pub async fn jettison(id: i32, assume_yes: bool) -> Result<(), CliError> {
    let id = CookieId::new(id);
    let (api, _session, mut dashboard, cookie) = fetch_owned(id).await?;

    let gate = TerminalPrompt { assume_yes };
    let outcome = Reconciler::new()
        .submit_delete(&api, dashboard.cache_mut(), &gate, &cookie)
        .await
        .map_err(CliError::Delete)?;

    match outcome {
        DeleteOutcome::Deleted => info!("Cookie {:?} jettisoned into space.", cookie.name),
        DeleteOutcome::Declined => info!("Jettison aborted."),
    }
    Ok(())
}

/// Authenticate, load the catalog, and resolve a cookie the current user
/// owns.
async fn fetch_owned(
    id: CookieId,
) -> Result<(RestClient, Session, Dashboard, Cookie), CliError> {
    let (api, session) = authenticate().await?;

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&api).await;

    let cookie = dashboard
        .cache()
        .get(id)
        .cloned()
        .ok_or(CliError::UnknownCookie(id))?;

    if !can_mutate(session.current_user(), &cookie) {
        return Err(CliError::NotPermitted("You can only modify cookies you baked."));
    }

    Ok((api, session, dashboard, cookie))
}

//! Role- and ownership-based gating of mutation affordances.
//!
//! One pure decision module consulted by both the presentation layer (which
//! controls to show) and the reconciliation path (which actions to accept),
//! so the two can never diverge. The backend is the authoritative
//! enforcement point and may still reject a call the client offered.

use moon_cookies_core::Role;

use crate::models::{Cookie, User};

/// Whether cookie creation is offered at all.
///
/// True only for a present user with the `astronaut` role.
#[must_use]
pub fn can_create(user: Option<&User>) -> bool {
    user.is_some_and(|user| user.role == Role::Astronaut)
}

/// Whether edit/delete affordances are offered for `cookie`.
///
/// True only for the cookie's owner. Requires the owner relation to have
/// been expanded by the listing; an unexpanded owner yields false.
#[must_use]
pub fn can_mutate(user: Option<&User>, cookie: &Cookie) -> bool {
    match (user, cookie.owner.as_ref()) {
        (Some(user), Some(owner)) => owner.id == user.id,
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use moon_cookies_core::{BakingStatus, CookieId, Email, Price, UserId};

    use super::*;

    fn user(id: i32, role: Role) -> User {
        User {
            id: UserId::new(id),
            name: "crew".to_string(),
            email: Email::parse("crew@moonbase.example").unwrap(),
            role,
        }
    }

    fn cookie_owned_by(owner: Option<User>) -> Cookie {
        Cookie {
            id: CookieId::new(1),
            name: "Lunar Crunch".to_string(),
            description: String::new(),
            price: Price::ZERO,
            inventory: 0,
            baking_status: BakingStatus::Dough,
            photo: None,
            owner,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_can_create_astronaut_only() {
        assert!(can_create(Some(&user(1, Role::Astronaut))));
        assert!(!can_create(Some(&user(1, Role::Customer))));
        assert!(!can_create(None));
    }

    #[test]
    fn test_can_mutate_owner_only() {
        let astronaut = user(1, Role::Astronaut);
        let cookie = cookie_owned_by(Some(astronaut.clone()));

        assert!(can_mutate(Some(&astronaut), &cookie));
        assert!(!can_mutate(Some(&user(2, Role::Astronaut)), &cookie));
        assert!(!can_mutate(None, &cookie));
    }

    #[test]
    fn test_can_mutate_requires_expanded_owner() {
        let astronaut = user(1, Role::Astronaut);
        let unowned = cookie_owned_by(None);

        assert!(!can_mutate(Some(&astronaut), &unowned));
    }

    #[test]
    fn test_role_does_not_grant_mutation() {
        // An astronaut who does not own the cookie gets no controls either.
        let owner = user(1, Role::Astronaut);
        let other_astronaut = user(2, Role::Astronaut);
        let cookie = cookie_owned_by(Some(owner));

        assert!(!can_mutate(Some(&other_astronaut), &cookie));
    }
}

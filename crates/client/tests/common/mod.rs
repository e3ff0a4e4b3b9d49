//! In-memory stand-in for the backend, shared by the scenario tests.
//!
//! Implements the same `CookieApi`/`AuthApi` traits the production
//! `RestClient` does, with switches for simulating outages and stalled
//! requests, and per-operation call counters so tests can assert that
//! declined or rejected actions never reach the network.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use chrono::{Duration, TimeZone, Utc};
use secrecy::{ExposeSecret, SecretString};

use moon_cookies_client::api::{ApiError, AuthApi, CookieApi};
use moon_cookies_client::models::{
    Cookie, CookiePayload, ImageVariant, Photo, SignupProfile, User,
};
use moon_cookies_core::{CookieId, Email, Role, UserId};

/// Poll a future exactly once without a runtime driving it.
pub fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    future.poll(&mut Context::from_waker(Waker::noop()))
}

pub fn astronaut(id: i32, name: &str) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: Email::parse(&format!("{}@moonbase.example", name.to_lowercase())).unwrap(),
        role: Role::Astronaut,
    }
}

pub fn customer(id: i32, name: &str) -> User {
    User {
        role: Role::Customer,
        ..astronaut(id, name)
    }
}

#[derive(Default)]
pub struct FakeApi {
    cookies: RefCell<Vec<Cookie>>,
    users: RefCell<Vec<(User, String)>>,
    active: RefCell<Option<User>>,
    next_cookie_id: Cell<i32>,
    next_user_id: Cell<i32>,

    /// Simulated reachability for the startup probe.
    pub healthy: Cell<bool>,
    /// When set, every collection operation fails with a 500.
    pub fail_requests: Cell<bool>,
    /// When set, collection operations never resolve.
    pub stall_requests: Cell<bool>,

    pub list_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub update_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,
    pub login_calls: Cell<usize>,
    pub me_calls: Cell<usize>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.healthy.set(true);
        api.next_cookie_id.set(1);
        api.next_user_id.set(1);
        api
    }

    /// Register a user account the fake will accept credentials for.
    pub fn register(&self, user: &User, password: &str) {
        self.users
            .borrow_mut()
            .push((user.clone(), password.to_string()));
        let next = self.next_user_id.get().max(user.id.as_i32() + 1);
        self.next_user_id.set(next);
    }

    /// Mark a user as the active session, as if a token were held.
    pub fn log_in_as(&self, user: &User) {
        *self.active.borrow_mut() = Some(user.clone());
    }

    pub fn active_user(&self) -> Option<User> {
        self.active.borrow().clone()
    }

    /// Seed a cookie directly into the fake's server-side state.
    pub fn seed_cookie(&self, owner: &User, name: &str) -> Cookie {
        let id = self.take_cookie_id();
        let cookie = Cookie {
            id,
            name: name.to_string(),
            description: String::new(),
            price: moon_cookies_core::Price::parse("1.00").unwrap(),
            inventory: 5,
            baking_status: moon_cookies_core::BakingStatus::ReadyForSale,
            photo: None,
            owner: Some(owner.clone()),
            created_at: Self::timestamp_for(id),
        };
        self.cookies.borrow_mut().push(cookie.clone());
        cookie
    }

    pub fn server_cookies(&self) -> Vec<Cookie> {
        self.cookies.borrow().clone()
    }

    fn take_cookie_id(&self) -> CookieId {
        let id = self.next_cookie_id.get();
        self.next_cookie_id.set(id + 1);
        CookieId::new(id)
    }

    /// Later ids get later timestamps, so newest-first ordering matches
    /// id order in tests.
    fn timestamp_for(id: CookieId) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + Duration::seconds(i64::from(id.as_i32()))
    }

    fn outage() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "simulated outage".to_string(),
        }
    }

    async fn gate(&self) -> Result<(), ApiError> {
        if self.stall_requests.get() {
            std::future::pending::<()>().await;
        }
        if self.fail_requests.get() {
            return Err(Self::outage());
        }
        Ok(())
    }

    fn owner_for(&self, id: UserId) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .map(|(user, _)| user)
            .find(|user| user.id == id)
            .cloned()
    }

    fn photo_for(id: CookieId) -> Photo {
        Photo {
            thumbnail: ImageVariant {
                url: format!("https://backend/storage/thumb-{id}.jpg"),
            },
        }
    }
}

impl CookieApi for FakeApi {
    async fn list_cookies(&self) -> Result<Vec<Cookie>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.gate().await?;

        let mut cookies = self.cookies.borrow().clone();
        cookies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cookies)
    }

    async fn create_cookie(&self, payload: &CookiePayload) -> Result<Cookie, ApiError> {
        self.create_calls.set(self.create_calls.get() + 1);
        self.gate().await?;

        let id = self.take_cookie_id();
        let cookie = Cookie {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            inventory: payload.inventory,
            baking_status: payload.baking_status,
            photo: payload.attachment.as_ref().map(|_| Self::photo_for(id)),
            owner: self.owner_for(payload.owner_id),
            created_at: Self::timestamp_for(id),
        };
        self.cookies.borrow_mut().push(cookie.clone());
        Ok(cookie)
    }

    async fn update_cookie(
        &self,
        id: CookieId,
        payload: &CookiePayload,
    ) -> Result<Cookie, ApiError> {
        self.update_calls.set(self.update_calls.get() + 1);
        self.gate().await?;

        let mut cookies = self.cookies.borrow_mut();
        let existing = cookies
            .iter_mut()
            .find(|cookie| cookie.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("no cookie with id {id}"),
            })?;

        existing.name = payload.name.clone();
        existing.description = payload.description.clone();
        existing.price = payload.price;
        existing.inventory = payload.inventory;
        existing.baking_status = payload.baking_status;
        if payload.attachment.is_some() {
            existing.photo = Some(Self::photo_for(id));
        }
        Ok(existing.clone())
    }

    async fn delete_cookie(&self, id: CookieId) -> Result<(), ApiError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.gate().await?;

        let mut cookies = self.cookies.borrow_mut();
        let before = cookies.len();
        cookies.retain(|cookie| cookie.id != id);
        if cookies.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: format!("no cookie with id {id}"),
            });
        }
        Ok(())
    }
}

impl AuthApi for FakeApi {
    async fn health(&self) -> Result<(), ApiError> {
        if self.healthy.get() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: 503,
                message: "unreachable".to_string(),
            })
        }
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        self.active
            .borrow()
            .clone()
            .ok_or_else(|| ApiError::Unauthorized("no active session".to_string()))
    }

    async fn login(&self, email: &str, password: &SecretString) -> Result<(), ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);

        let users = self.users.borrow();
        let matched = users
            .iter()
            .find(|(user, stored)| {
                user.email.as_str() == email && stored.as_str() == password.expose_secret()
            })
            .map(|(user, _)| user.clone());
        drop(users);

        match matched {
            Some(user) => {
                *self.active.borrow_mut() = Some(user);
                Ok(())
            }
            None => Err(ApiError::Unauthorized("invalid credentials".to_string())),
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        *self.active.borrow_mut() = None;
        Ok(())
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<(), ApiError> {
        let taken = self
            .users
            .borrow()
            .iter()
            .any(|(user, _)| user.email == profile.email);
        if taken {
            return Err(ApiError::Status {
                status: 400,
                message: "email already taken".to_string(),
            });
        }

        let id = self.next_user_id.get();
        self.next_user_id.set(id + 1);
        let user = User {
            id: UserId::new(id),
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: Role::Customer,
        };
        self.users
            .borrow_mut()
            .push((user, profile.password.expose_secret().to_string()));
        Ok(())
    }
}

//! Moon Cookies Core - Shared types library.
//!
//! This crate provides common types used across all Moon Cookies client
//! components:
//! - `client` - Resource synchronization and mutation library
//! - `cli` - Command-line front end for the lunar bakery
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles,
//!   and baking statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Loomline Core - Shared types library.
//!
//! This crate provides the pieces of Loomline that carry decisions but no I/O:
//! - `storefront` - the HTTP service, which reads sessions and forms
//! - `cli` - command-line tools for migrations and offline validation
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, slugs, prices, and roles
//! - [`auth`] - Role guards over the session-derived user
//! - [`validation`] - Contact and product form schemas
//! - [`taxonomy`] - Static category, type, and material tables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod taxonomy;
pub mod types;
pub mod validation;

pub use auth::{AuthError, Guard, Resolution, SessionUser, User};
pub use types::*;
pub use validation::{FieldError, Schema, ValidationErrors};

//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Resolve the session user and enforce role guards

pub mod auth;

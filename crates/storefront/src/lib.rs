//! Loomline storefront library.
//!
//! Session-backed role guards and admin form validation over HTTP. The
//! binary in `main.rs` wires configuration, telemetry and the session store
//! around [`app::build_router`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

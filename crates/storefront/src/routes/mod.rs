//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /health/ready                 - Readiness check (database, when configured)
//!
//! # Session
//! GET  /api/session                  - Current user or null
//! POST /auth/logout                  - Clear the session user
//!
//! # Catalog
//! GET  /api/catalog/taxonomy         - Categories, types and materials
//!
//! # Account (requires customer)
//! GET  /api/account                  - Customer profile
//!
//! # Admin (requires admin)
//! POST /api/admin/contacts/validate  - Validate a contact form
//! POST /api/admin/products/validate  - Validate a product form
//! ```

pub mod account;
pub mod admin;
pub mod catalog;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts/validate", post(admin::validate_contact))
        .route("/products/validate", post(admin::validate_product))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/session", get(session::show))
        .route("/auth/logout", post(session::logout))
        .route("/api/catalog/taxonomy", get(catalog::taxonomy))
        .route("/api/account", get(account::show))
        .nest("/api/admin", admin_routes())
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}

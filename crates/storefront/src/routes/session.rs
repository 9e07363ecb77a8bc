//! Session inspection and logout.

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use loomline_core::User;

use crate::error::{Result, clear_sentry_user};
use crate::middleware::CurrentUser;
use crate::services::auth;

/// Body of `GET /api/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

/// Report who is signed in, if anyone.
///
/// GET /api/session
pub async fn show(CurrentUser(user): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse { user })
}

/// Sign the current user out.
///
/// POST /auth/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    auth::clear_current_user(&session).await?;
    clear_sentry_user();
    tracing::info!("User signed out");
    Ok(StatusCode::NO_CONTENT)
}

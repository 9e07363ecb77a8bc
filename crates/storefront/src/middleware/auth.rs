//! Authentication extractors.
//!
//! Each extractor reads the session once and runs one guard. Rejections are
//! [`AppError::Auth`], which renders as 401 or 403 JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn admin_only(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
//!     format!("Hello, {}!", admin.name)
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use loomline_core::{AuthError, Guard, User};

use crate::error::{AppError, set_sentry_user};
use crate::services::auth;

/// Run `guard` against the request's session.
async fn guarded(parts: &Parts, guard: Guard) -> Result<User, AppError> {
    // Get the session from extensions (set by SessionManagerLayer)
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthError::Unauthorized)?;

    let user = auth::resolve(session, guard).await.into_result()?;
    set_sentry_user(&user.id, user.email.as_ref().map(|e| e.as_str()));
    Ok(user)
}

/// Extractor that optionally gets the current user. Never rejects.
pub struct CurrentUser(pub Option<User>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => auth::get_current_user(session).await,
            None => None,
        };

        Ok(Self(user))
    }
}

/// Extractor that requires any signed-in user.
pub struct RequireAuth(pub User);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        guarded(parts, Guard::Authenticated).await.map(Self)
    }
}

/// Extractor that requires a signed-in admin.
pub struct RequireAdmin(pub User);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        guarded(parts, Guard::Admin).await.map(Self)
    }
}

/// Extractor that requires a signed-in customer.
pub struct RequireCustomer(pub User);

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        guarded(parts, Guard::Customer).await.map(Self)
    }
}

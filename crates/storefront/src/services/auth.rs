//! Session-backed user resolution.
//!
//! One store read per call, then a pure guard from `loomline_core::auth`.
//! Store read failures are logged and treated as "no user".

use tower_sessions::Session;
use tracing::instrument;

use loomline_core::{AuthError, Guard, Resolution, SessionUser, User};

use crate::models::session_keys;

/// Read the current user from the session. Never fails.
#[instrument(skip(session))]
pub async fn get_current_user(session: &Session) -> Option<User> {
    let record = match session.get::<SessionUser>(session_keys::USER).await {
        Ok(record) => record?,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session user");
            return None;
        }
    };

    let user = record.into_user();
    if user.is_none() {
        tracing::debug!("Session user record is incomplete, treating as signed out");
    }
    user
}

/// Resolve `guard` against the session.
pub async fn resolve(session: &Session, guard: Guard) -> Resolution {
    let resolution = guard.check(get_current_user(session).await);
    match &resolution {
        Resolution::Resolved(user) => {
            tracing::debug!(user_id = %user.id, role = %user.role, ?guard, "Session resolved");
        }
        Resolution::Unauthenticated => tracing::debug!(?guard, "No session user"),
        Resolution::WrongRole { required, actual } => {
            tracing::debug!(%required, %actual, "Session user has the wrong role");
        }
    }
    resolution
}

/// Require any signed-in user.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] when no valid session user exists.
pub async fn require_auth(session: &Session) -> Result<User, AuthError> {
    resolve(session, Guard::Authenticated).await.into_result()
}

/// Require a signed-in admin.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] without a session user,
/// [`AuthError::ForbiddenRole`] for a non-admin.
pub async fn require_admin(session: &Session) -> Result<User, AuthError> {
    resolve(session, Guard::Admin).await.into_result()
}

/// Require a signed-in customer.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] without a session user,
/// [`AuthError::ForbiddenRole`] for a non-customer.
pub async fn require_customer(session: &Session) -> Result<User, AuthError> {
    resolve(session, Guard::Customer).await.into_result()
}

/// Store `user` as the session's signed-in user.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &User,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::USER, SessionUser::from(user))
        .await
}

/// Remove the signed-in user from the session (logout).
///
/// The stored record is discarded without being decoded, so a record that
/// reads as signed out can still be cleared.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(session_keys::USER).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use loomline_core::{ContactId, Email, Role, UserId};
    use serde_json::json;
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user(role: Role) -> User {
        User {
            id: UserId::new(5),
            role,
            contact_id: Some(ContactId::new(50)),
            name: "Kabir".to_string(),
            email: Some(Email::parse("kabir@example.com").unwrap()),
        }
    }

    #[tokio::test]
    async fn test_empty_session_has_no_user() {
        let session = session();
        assert_eq!(get_current_user(&session).await, None);
        assert_eq!(require_auth(&session).await, Err(AuthError::Unauthorized));
        assert_eq!(require_admin(&session).await, Err(AuthError::Unauthorized));
        assert_eq!(require_customer(&session).await, Err(AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn test_admin_session() {
        let session = session();
        set_current_user(&session, &user(Role::Admin)).await.unwrap();

        assert_eq!(require_admin(&session).await, Ok(user(Role::Admin)));
        assert_eq!(require_auth(&session).await, Ok(user(Role::Admin)));
        assert!(matches!(
            require_customer(&session).await,
            Err(AuthError::ForbiddenRole { .. })
        ));
    }

    #[tokio::test]
    async fn test_guard_is_idempotent_for_unchanged_session() {
        let session = session();
        set_current_user(&session, &user(Role::Customer)).await.unwrap();

        let first = require_admin(&session).await;
        let second = require_admin(&session).await;
        assert_eq!(first, second);

        let first = require_customer(&session).await;
        let second = require_customer(&session).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_record_without_role_is_signed_out() {
        let session = session();
        session
            .insert(session_keys::USER, json!({"id": 1, "name": "Ghost"}))
            .await
            .unwrap();
        assert_eq!(get_current_user(&session).await, None);
        assert_eq!(require_auth(&session).await, Err(AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn test_malformed_record_does_not_fail() {
        let session = session();
        session
            .insert(session_keys::USER, json!("not a record"))
            .await
            .unwrap();
        assert_eq!(get_current_user(&session).await, None);
    }

    #[tokio::test]
    async fn test_clear_undecodable_record() {
        let session = session();
        session
            .insert(session_keys::USER, json!({"id": "abc", "role": "ADMIN"}))
            .await
            .unwrap();
        assert_eq!(get_current_user(&session).await, None);

        assert!(clear_current_user(&session).await.is_ok());
        assert_eq!(session.get_value(session_keys::USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_current_user() {
        let session = session();
        set_current_user(&session, &user(Role::Customer)).await.unwrap();
        clear_current_user(&session).await.unwrap();
        assert_eq!(get_current_user(&session).await, None);
    }
}

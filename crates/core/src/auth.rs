//! Role-gated session resolution.
//!
//! The session store hands back a loosely shaped [`SessionUser`]. It becomes a
//! [`User`] only when it carries an id and a role. A [`Guard`] then turns the
//! optional user into a [`Resolution`], which callers either match on or
//! convert into a `Result` with [`Resolution::into_result`].
//!
//! Guards are pure: the same input always yields the same resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ContactId, Email, Role, UserId};

/// An authenticated user, materialized per request from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub role: Role,
    /// Contact record linked to this user, if any.
    pub contact_id: Option<ContactId>,
    /// Display name.
    pub name: String,
    pub email: Option<Email>,
}

/// The user record as stored in the session.
///
/// Every field is optional because the store does not enforce a shape.
/// Ids must be JSON integers: the sign-in flow writes the numeric
/// [`UserId`] and [`ContactId`], and a record carrying string ids does not
/// decode, which readers treat as signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub contact_id: Option<ContactId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Promote the stored record into a [`User`].
    ///
    /// Returns `None` when `id` or `role` is missing or a present email does
    /// not parse. A missing name becomes the empty string.
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        let email = match self.email {
            Some(raw) => Some(Email::parse(&raw).ok()?),
            None => None,
        };

        Some(User {
            id: self.id?,
            role: self.role?,
            contact_id: self.contact_id,
            name: self.name.unwrap_or_default(),
            email,
        })
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            role: Some(user.role),
            contact_id: user.contact_id,
            name: Some(user.name.clone()),
            email: user.email.as_ref().map(|e| e.as_str().to_owned()),
        }
    }
}

/// Authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No valid session.
    #[error("authentication required")]
    Unauthorized,
    /// Valid session, wrong role.
    #[error("requires role {required}, session has {actual}")]
    ForbiddenRole { required: Role, actual: Role },
}

/// Outcome of running a [`Guard`] against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(User),
    Unauthenticated,
    WrongRole { required: Role, actual: Role },
}

impl Resolution {
    /// Convert into a `Result`, mapping each rejection to its [`AuthError`].
    ///
    /// # Errors
    ///
    /// [`AuthError::Unauthorized`] for [`Resolution::Unauthenticated`],
    /// [`AuthError::ForbiddenRole`] for [`Resolution::WrongRole`].
    pub fn into_result(self) -> Result<User, AuthError> {
        match self {
            Self::Resolved(user) => Ok(user),
            Self::Unauthenticated => Err(AuthError::Unauthorized),
            Self::WrongRole { required, actual } => {
                Err(AuthError::ForbiddenRole { required, actual })
            }
        }
    }

    /// The resolved user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Resolved(user) => Some(user),
            Self::Unauthenticated | Self::WrongRole { .. } => None,
        }
    }
}

/// Escalating access requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Any authenticated user.
    Authenticated,
    /// Authenticated with [`Role::Admin`].
    Admin,
    /// Authenticated with [`Role::Customer`].
    Customer,
}

impl Guard {
    /// Role this guard demands beyond authentication.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Authenticated => None,
            Self::Admin => Some(Role::Admin),
            Self::Customer => Some(Role::Customer),
        }
    }

    /// Resolve the guard against the current user.
    ///
    /// An absent user is always [`Resolution::Unauthenticated`], whatever the
    /// guard, so role mismatches are only reported for real sessions.
    #[must_use]
    pub fn check(self, user: Option<User>) -> Resolution {
        let Some(user) = user else {
            return Resolution::Unauthenticated;
        };

        match self.required_role() {
            Some(required) if user.role != required => Resolution::WrongRole {
                required,
                actual: user.role,
            },
            _ => Resolution::Resolved(user),
        }
    }
}

/// Require any authenticated user.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] when `user` is `None`.
pub fn require_auth(user: Option<User>) -> Result<User, AuthError> {
    Guard::Authenticated.check(user).into_result()
}

/// Require an admin.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] when `user` is `None`,
/// [`AuthError::ForbiddenRole`] when the user is not an admin.
pub fn require_admin(user: Option<User>) -> Result<User, AuthError> {
    Guard::Admin.check(user).into_result()
}

/// Require a customer.
///
/// # Errors
///
/// [`AuthError::Unauthorized`] when `user` is `None`,
/// [`AuthError::ForbiddenRole`] when the user is not a customer.
pub fn require_customer(user: Option<User>) -> Result<User, AuthError> {
    Guard::Customer.check(user).into_result()
}

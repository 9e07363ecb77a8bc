//! Session keys.
//!
//! The user record itself is [`loomline_core::SessionUser`]; the sign-in flow
//! that writes it lives outside this service.

/// Session keys for authentication data.
pub mod keys {
    /// Key under which the signed-in user's record is stored.
    pub const USER: &str = "user";
}

//! Customer account route handlers.
//!
//! These routes require a signed-in customer.

use axum::Json;
use tracing::instrument;

use loomline_core::User;

use crate::middleware::RequireCustomer;

/// Show the signed-in customer's profile.
///
/// GET /api/account
#[instrument(skip_all, fields(user_id = %customer.id))]
pub async fn show(RequireCustomer(customer): RequireCustomer) -> Json<User> {
    Json(customer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{TestApp, admin_record, customer_record};

    #[tokio::test]
    async fn test_customer_sees_profile() {
        let app = TestApp::new();
        let cookie = app.sign_in(&customer_record()).await;

        let (status, body) = app.get("/api/account", Some(&cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "CUSTOMER");
        assert_eq!(body["contactId"], json!(200));
    }

    #[tokio::test]
    async fn test_admin_is_forbidden() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let (status, body) = app.get("/api/account", Some(&cookie)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "forbidden");
    }

    #[tokio::test]
    async fn test_anonymous_is_unauthorized() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/account", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");
    }
}

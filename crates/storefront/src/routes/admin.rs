//! Admin form validation endpoints.
//!
//! Both handlers require an admin session and answer with the typed record,
//! or 422 listing every field error.

use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;
use tracing::instrument;

use loomline_core::{
    Schema, ValidationErrors, taxonomy,
    validation::{Contact, ContactSchema, Product, ProductSchema},
};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;

fn payload(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Validate a contact form.
///
/// POST /api/admin/contacts/validate
#[instrument(skip_all, fields(admin_id = %admin.id))]
pub async fn validate_contact(
    RequireAdmin(admin): RequireAdmin,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Contact>> {
    let raw = payload(body)?;

    match ContactSchema::validate(&raw) {
        Ok(contact) => {
            tracing::info!(contact_type = contact.contact_type.as_str(), "Contact form accepted");
            Ok(Json(contact))
        }
        Err(errors) => {
            tracing::info!(error_count = errors.len(), "Contact form rejected");
            Err(errors.into())
        }
    }
}

/// Validate a product form, then check its category, type and material
/// against the catalog taxonomy.
///
/// POST /api/admin/products/validate
#[instrument(skip_all, fields(admin_id = %admin.id))]
pub async fn validate_product(
    RequireAdmin(admin): RequireAdmin,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>> {
    let raw = payload(body)?;

    let product = ProductSchema::validate(&raw).inspect_err(|errors| {
        tracing::info!(error_count = errors.len(), "Product form rejected");
    })?;

    let mismatches =
        taxonomy::check_selection(&product.category, &product.product_type, &product.material);
    if let Some(errors) = ValidationErrors::from_errors(mismatches) {
        tracing::info!(
            error_count = errors.len(),
            category = %product.category,
            "Product outside the taxonomy"
        );
        return Err(errors.into());
    }

    tracing::info!(slug = %product.slug, "Product form accepted");
    Ok(Json(product))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_support::{TestApp, admin_record, customer_record};

    fn fields(body: &Value) -> Vec<&str> {
        body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect()
    }

    fn product() -> Value {
        json!({
            "name": "Indigo Kurta",
            "slug": "indigo-kurta",
            "description": "Hand block printed.",
            "category": "Topwear",
            "type": "Kurta",
            "material": "Cotton",
            "price": "1499.00",
            "stock": 12,
            "images": ["https://cdn.example.com/kurta.jpg"],
            "isPublished": true
        })
    }

    #[tokio::test]
    async fn test_contact_requires_admin() {
        let app = TestApp::new();
        let body = json!({"type": "VENDOR", "name": "Weavers Co"});

        let (status, _) = app
            .post("/api/admin/contacts/validate", None, Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let cookie = app.sign_in(&customer_record()).await;
        let (status, _) = app
            .post("/api/admin/contacts/validate", Some(&cookie), Some(body))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_contact_accepted() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let (status, body) = app
            .post(
                "/api/admin/contacts/validate",
                Some(&cookie),
                Some(json!({"type": "BOTH", "name": "Weavers Co", "email": ""})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "BOTH");
        assert_eq!(body["email"], Value::Null);
    }

    #[tokio::test]
    async fn test_contact_rejected_lists_fields() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let (status, body) = app
            .post(
                "/api/admin/contacts/validate",
                Some(&cookie),
                Some(json!({"type": "SUPPLIER", "name": "W", "email": "not-an-email"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(fields(&body), vec!["type", "name", "email"]);
    }

    #[tokio::test]
    async fn test_product_accepted() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let (status, body) = app
            .post("/api/admin/products/validate", Some(&cookie), Some(product()))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "indigo-kurta");
        assert_eq!(body["stock"], 12);
        assert_eq!(body["isPublished"], true);
    }

    #[tokio::test]
    async fn test_product_schema_errors() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let mut raw = product();
        raw.as_object_mut().unwrap().remove("name");
        raw["stock"] = json!(-5);

        let (status, body) = app
            .post("/api/admin/products/validate", Some(&cookie), Some(raw))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(fields(&body), vec!["name", "stock"]);
    }

    #[tokio::test]
    async fn test_product_outside_taxonomy() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let mut raw = product();
        raw["type"] = json!("Jeans");
        raw["material"] = json!("Bamboo");

        let (status, body) = app
            .post("/api/admin/products/validate", Some(&cookie), Some(raw))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(fields(&body), vec!["type", "material"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = TestApp::new();
        let cookie = app.sign_in(&admin_record()).await;

        let (status, body) = app
            .post_raw("/api/admin/products/validate", Some(&cookie), "{not json")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }
}

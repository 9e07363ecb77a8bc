//! Catalog reference data.

use axum::Json;

use loomline_core::taxonomy::{self, TaxonomyView};

/// Categories with their permitted types, and materials.
///
/// GET /api/catalog/taxonomy
pub async fn taxonomy() -> Json<TaxonomyView> {
    Json(taxonomy::view())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::TestApp;

    #[tokio::test]
    async fn test_taxonomy_is_public() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/catalog/taxonomy", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["categories"][0],
            json!({"name": "Topwear", "types": ["T-Shirt", "Shirt", "Polo", "Kurta"]})
        );
        assert_eq!(body["materials"][0], "Cotton");
    }
}

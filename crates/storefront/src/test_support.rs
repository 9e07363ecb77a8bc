//! In-process router harness for handler tests.
//!
//! Sign-in happens outside this service, so tests get a `/test/sign-in`
//! route that writes a raw [`SessionUser`] into the session.

#![allow(clippy::unwrap_used)]

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::post,
};
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session};

use loomline_core::{ContactId, Role, SessionUser, UserId};

use crate::app::with_layers;
use crate::config::StorefrontConfig;
use crate::models::session_keys;
use crate::routes;
use crate::state::AppState;

pub fn admin_record() -> SessionUser {
    SessionUser {
        id: Some(UserId::new(1)),
        role: Some(Role::Admin),
        contact_id: None,
        name: Some("Anaya".to_string()),
        email: Some("anaya@loomline.example".to_string()),
    }
}

pub fn customer_record() -> SessionUser {
    SessionUser {
        id: Some(UserId::new(2)),
        role: Some(Role::Customer),
        contact_id: Some(ContactId::new(200)),
        name: Some("Rohan".to_string()),
        email: Some("rohan@example.com".to_string()),
    }
}

async fn sign_in(session: Session, Json(record): Json<Value>) -> StatusCode {
    session.insert(session_keys::USER, record).await.unwrap();
    StatusCode::NO_CONTENT
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        let routes = routes::routes().route("/test/sign-in", post(sign_in));
        Self {
            router: with_layers(routes, AppState::new(config, None), MemoryStore::default()),
        }
    }

    /// Store `record` in a fresh session and return its cookie pair.
    pub async fn sign_in(&self, record: &SessionUser) -> String {
        self.sign_in_raw(serde_json::to_value(record).unwrap()).await
    }

    /// Store an arbitrary JSON value as the session user record.
    pub async fn sign_in_raw(&self, record: Value) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/test/sign-in")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&record).unwrap()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();

        set_cookie.split(';').next().unwrap().to_string()
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", path, cookie, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|value| serde_json::to_string(&value).unwrap());
        self.send("POST", path, cookie, body).await
    }

    pub async fn post_raw(
        &self,
        path: &str,
        cookie: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        self.send("POST", path, cookie, Some(body.to_string())).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        cookie: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}

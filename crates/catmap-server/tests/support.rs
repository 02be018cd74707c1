#![allow(dead_code)]

use std::sync::Arc;
use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use catmap_core::{Role, UserChanges, UserStore};
use catmap_db::memory::{MemoryCatStore, MemoryUserStore};
use catmap_server::app::{build_router, AppState};
use catmap_server::config::ServerConfig;
use catmap_server::infra::media::LocalMedia;

pub struct TestApp {
    pub app: axum::Router,
    pub users: MemoryUserStore,
    pub cats: MemoryCatStore,
    pub upload_dir: std::path::PathBuf,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("catmap_server=debug"))
                .with_test_writer()
                .try_init();
        });

        let users = MemoryUserStore::new();
        let cats = MemoryCatStore::new();
        let upload_dir =
            std::env::temp_dir().join(format!("catmap-tests-{}", Uuid::now_v7().simple()));
        let state = AppState {
            users: Arc::new(users.clone()),
            cats: Arc::new(cats.clone()),
            db: None,
            started_at: Instant::now(),
            token_secret: "secret".to_string(),
            password_pepper: "pepper".to_string(),
            token_ttl_seconds: 3600,
            media: Arc::new(LocalMedia::new(upload_dir.clone())),
            config,
        };
        let app = build_router(state);
        Self {
            app,
            users,
            cats,
            upload_dir,
        }
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = builder
            .body(Body::from(serde_json::to_vec(&body).expect("encode json")))
            .expect("request");
        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json")
        };
        (status, json)
    }

    pub async fn send_empty(&self, method: Method, uri: &str, token: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).expect("request");
        let response = self.app.clone().oneshot(request).await.expect("response");
        response.status()
    }

    pub async fn get_json(
        &self,
        uri: &str,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).expect("request");
        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json")
        };
        (status, json)
    }

    pub async fn register(
        &self,
        user_name: &str,
        email: &str,
        password: &str,
    ) -> serde_json::Value {
        let payload = json!({
            "user_name": user_name,
            "email": email,
            "password": password,
        });
        let (status, body) = self.send_json(Method::POST, "/v1/users", None, payload).await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {:?}", body);
        body
    }

    pub async fn login(&self, user_name: &str, password: &str) -> String {
        let payload = json!({ "user_name": user_name, "password": password });
        let (status, body) = self
            .send_json(Method::POST, "/v1/auth/login", None, payload)
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {:?}", body);
        body["token"].as_str().expect("token").to_string()
    }

    /// Registers `<name>@example.com` with a fixed password and returns the
    /// new user's id plus a fresh token.
    pub async fn register_and_login(&self, user_name: &str) -> (Uuid, String) {
        let email = format!("{user_name}@example.com");
        let body = self.register(user_name, &email, "password-1").await;
        let id = body["data"]["id"]
            .as_str()
            .expect("user id")
            .parse()
            .expect("uuid");
        let token = self.login(user_name, "password-1").await;
        (id, token)
    }

    /// Registers a user, flips the stored role to Admin, then logs in so the
    /// token carries the Admin claim.
    pub async fn admin(&self, user_name: &str) -> (Uuid, String) {
        let email = format!("{user_name}@example.com");
        let body = self.register(user_name, &email, "password-1").await;
        let id: Uuid = body["data"]["id"]
            .as_str()
            .expect("user id")
            .parse()
            .expect("uuid");
        let changes = UserChanges {
            role: Some(Role::Admin),
            ..UserChanges::default()
        };
        self.users
            .update_by_id(id, changes)
            .await
            .expect("promote admin")
            .expect("admin exists");
        let token = self.login(user_name, "password-1").await;
        (id, token)
    }

    pub async fn create_cat(&self, token: &str, name: &str, lat: f64, lng: f64) -> Uuid {
        let payload = json!({
            "name": name,
            "weight": 4.2,
            "birthdate": "2020-01-01",
            "location": { "lat": lat, "lng": lng },
        });
        let (status, body) = self
            .send_json(Method::POST, "/v1/cats", Some(token), payload)
            .await;
        assert_eq!(status, StatusCode::CREATED, "create cat failed: {:?}", body);
        body["data"]["id"]
            .as_str()
            .expect("cat id")
            .parse()
            .expect("uuid")
    }

    /// Posts a GraphQL document. The transport always answers 200; failures
    /// surface in the body's `errors` array.
    pub async fn graphql(
        &self,
        token: Option<&str>,
        query: &str,
        variables: serde_json::Value,
    ) -> serde_json::Value {
        let payload = json!({ "query": query, "variables": variables });
        let (status, body) = self.send_json(Method::POST, "/graphql", token, payload).await;
        assert_eq!(status, StatusCode::OK, "graphql transport failed: {:?}", body);
        body
    }
}

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::{
        apartment::ApartmentDto, apartment_user::ApartmentUserDto, car::CarPageDto,
        company::CompanyDto, favorite::FavoriteDto,
    },
    server::{
        cache::{key, memory::MemoryCache, Cache},
        router::router,
        service::auth::jwt::JwtService,
        state::AppState,
    },
};

mod apartment;
mod company;

/// Router wired to an in-memory SQLite database and an in-memory cache.
struct TestApp {
    context: TestContext,
    cache: Arc<MemoryCache>,
    jwt: JwtService,
    token: String,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
        let jwt = JwtService::new("HS256", &"s".repeat(64), 15, 64).unwrap();
        let token = jwt.dummy_token().unwrap();

        let router = router(AppState::new(db, cache.clone(), jwt.clone()));

        Self {
            context,
            cache,
            jwt,
            token,
            router,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Sends a request without an `Authorization` header.
    async fn anonymous(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.send(build_request(method, uri, body, None)).await
    }

    /// Sends a request carrying the development bearer token.
    async fn authed(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.send(build_request(method, uri, body, Some(&self.token)))
            .await
    }

    async fn cached(&self, key: &str) -> Option<String> {
        self.cache.get(key).await.unwrap()
    }
}

fn build_request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn error_message(response: Response) -> String {
    let body: Value = body_json(response).await;
    body["error"].as_str().unwrap().to_string()
}

//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use serde_json::{json, Value};
use std::net::TcpListener;
use tempfile::TempDir;
use travelhub::api::Services;
use travelhub::http::ApiClient;
use travelhub::store::{AppStore, SessionStore};

pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/800x400?text=Travel+Article";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn make_services(base_url: &str) -> Services {
    let client = ApiClient::new(base_url).expect("valid base url");
    Services::new(client, PLACEHOLDER_COVER)
}

/// Store without persistence.
pub fn make_store(base_url: &str) -> AppStore {
    AppStore::new(make_services(base_url))
}

/// Store persisting into a fresh temp dir. Keep the dir alive for the test.
pub fn make_persistent_store(base_url: &str) -> (AppStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = AppStore::with_session(make_services(base_url), SessionStore::new(dir.path()));
    (store, dir)
}

// -- JSON fixtures ------------------------------------------------------------

pub fn user_json(id: u64, username: &str) -> Value {
    json!({
        "id": id,
        "documentId": format!("u{}", id),
        "username": username,
        "email": format!("{}@example.com", username),
        "provider": "local",
        "confirmed": true,
        "blocked": false,
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    })
}

pub fn category_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "documentId": format!("c{}", id),
        "name": name
    })
}

pub fn article_json(id: u64, document_id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "documentId": document_id,
        "title": title,
        "description": "A long enough description of a trip somewhere far away and back again.",
        "cover_image_url": "https://images.example.com/cover.jpg",
        "createdAt": "2025-02-01T00:00:00.000Z",
        "updatedAt": "2025-02-01T00:00:00.000Z",
        "publishedAt": "2025-02-01T00:00:00.000Z"
    })
}

/// Article with author and category relations populated.
pub fn owned_article_json(id: u64, document_id: &str, owner_id: u64) -> Value {
    let mut article = article_json(id, document_id, "Owned Article");
    article["user"] = user_json(owner_id, &format!("user{}", owner_id));
    article["category"] = category_json(1, "Asia");
    article
}

pub fn page_json(articles: Vec<Value>, page: u32, page_count: u32) -> Value {
    json!({
        "data": articles,
        "meta": {
            "pagination": {
                "page": page,
                "pageSize": 9,
                "pageCount": page_count,
                "total": page_count * 9
            }
        }
    })
}

pub fn auth_json(jwt: &str, user: Value) -> Value {
    json!({ "jwt": jwt, "user": user })
}

pub fn data_json(data: Value) -> Value {
    json!({ "data": data, "meta": {} })
}

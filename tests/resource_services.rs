//! Category, comment and upload services.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{category_json, data_json, make_services, page_json, user_json};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use travelhub::http::ApiError;
use travelhub::models::{
    AuthToken, CreateCategoryRequest, CreateCommentRequest, UpdateCategoryRequest,
    UpdateCommentRequest,
};

#[tokio::test]
async fn category_crud_endpoints() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::ok(page_json(
        vec![category_json(1, "Asia"), category_json(2, "Europe")],
        1,
        1,
    )))
    .await;
    mock.enqueue_response(MockResponse::ok(data_json(category_json(3, "Africa"))))
        .await;
    mock.enqueue_response(MockResponse::ok(data_json(category_json(3, "Oceania"))))
        .await;
    mock.enqueue_response(MockResponse::empty(204)).await;

    let services = make_services(&mock.base_url());
    let token = AuthToken::new("tok");

    let list = services.categories.list(None).await.unwrap();
    assert_eq!(list.data.len(), 2);

    let created = services
        .categories
        .create(
            &CreateCategoryRequest {
                name: "Africa".to_string(),
            },
            &token,
        )
        .await
        .unwrap();
    assert_eq!(created.data.name, "Africa");

    services
        .categories
        .update(
            "c3",
            &UpdateCategoryRequest {
                name: "Oceania".to_string(),
            },
            &token,
        )
        .await
        .unwrap();
    services.categories.delete("c3", &token).await.unwrap();

    let requests = mock.captured_requests().await;
    let summary: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("GET", "/api/categories"),
            ("POST", "/api/categories"),
            ("PUT", "/api/categories/c3"),
            ("DELETE", "/api/categories/c3"),
        ]
    );
    assert_eq!(requests[1].body_json(), json!({"data": {"name": "Africa"}}));
    assert_eq!(requests[2].body_json(), json!({"data": {"name": "Oceania"}}));
}

#[tokio::test]
async fn comment_reads_populate_relations() {
    let mock = MockBackend::start().await;
    let comment = json!({
        "id": 5,
        "documentId": "cm5",
        "content": "Lovely write-up",
        "user": user_json(2, "dave")
    });
    mock.enqueue_response(MockResponse::ok(page_json(vec![comment.clone()], 1, 1)))
        .await;
    mock.enqueue_response(MockResponse::ok(data_json(comment)))
        .await;

    let services = make_services(&mock.base_url());
    let list = services.comments.list(None).await.unwrap();
    assert_eq!(list.data[0].content, "Lovely write-up");
    let one = services.comments.get("cm5", None).await.unwrap();
    assert_eq!(one.data.user.map(|u| u.username), Some("dave".to_string()));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/comments");
    assert_eq!(requests[0].query, "populate=*");
    assert_eq!(requests[1].path, "/api/comments/cm5");
    assert_eq!(requests[1].query, "populate=*");
}

#[tokio::test]
async fn comment_writes_use_data_envelope() {
    let mock = MockBackend::start().await;
    let comment = json!({"id": 6, "documentId": "cm6", "content": "Nice"});
    mock.enqueue_response(MockResponse::ok(data_json(comment.clone())))
        .await;
    mock.enqueue_response(MockResponse::ok(data_json(comment)))
        .await;

    let services = make_services(&mock.base_url());
    let token = AuthToken::new("tok");
    services
        .comments
        .create(
            &CreateCommentRequest {
                content: "Nice".to_string(),
                article: 4,
            },
            &token,
        )
        .await
        .unwrap();
    services
        .comments
        .update(
            "cm6",
            &UpdateCommentRequest {
                content: Some("Nicer".to_string()),
            },
            &token,
        )
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(
        requests[0].body_json(),
        json!({"data": {"content": "Nice", "article": 4}})
    );
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/api/comments/cm6");
    assert_eq!(requests[1].body_json(), json!({"data": {"content": "Nicer"}}));
}

#[tokio::test]
async fn upload_sends_files_part() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::ok(json!([{
        "id": 11,
        "name": "cover.png",
        "hash": "cover_abc",
        "ext": ".png",
        "mime": "image/png",
        "size": 12.5,
        "url": "/uploads/cover_abc.png",
        "provider": "local"
    }])))
    .await;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not really a png").unwrap();

    let services = make_services(&mock.base_url());
    let assets = services
        .upload
        .upload_file(file.path(), &AuthToken::new("tok"))
        .await
        .unwrap();

    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].url, "/uploads/cover_abc.png");

    let req = mock.single_request().await;
    assert_eq!(req.path, "/api/upload");
    assert_eq!(req.header("authorization"), Some("Bearer tok"));
    let body = req.body_text();
    assert!(body.contains("name=\"files\""));
    assert!(body.contains("not really a png"));
}

#[tokio::test]
async fn upload_of_missing_file_never_hits_network() {
    let mock = MockBackend::start().await;
    let services = make_services(&mock.base_url());

    let err = services
        .upload
        .upload_file(
            std::path::Path::new("/definitely/not/here.png"),
            &AuthToken::new("tok"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Io { .. }));
    assert!(mock.captured_requests().await.is_empty());
}

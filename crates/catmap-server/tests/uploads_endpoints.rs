use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

mod support;

use support::TestApp;

const BOUNDARY: &str = "catmap-test-boundary";

fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match filename {
            Some(filename) => format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_upload(
    app: &TestApp,
    token: Option<&str>,
    parts: &[(&str, Option<&str>, &[u8])],
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/v1/uploads")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder
        .body(Body::from(multipart_body(parts)))
        .expect("request");
    let response = app.app.clone().oneshot(request).await.expect("response");
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

#[tokio::test]
async fn upload_requires_authentication() {
    let app = TestApp::new().await;

    let (status, _body) = post_upload(
        &app,
        None,
        &[("file", Some("whiskers.jpg"), b"jpeg bytes".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_stores_the_file_and_reports_defaults() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("otto").await;

    let (status, body) = post_upload(
        &app,
        Some(&token),
        &[
            // Unrelated fields before the file are skipped, not rejected.
            ("note", None, b"ignore me".as_slice()),
            ("file", Some("whiskers.jpg"), b"jpeg bytes".as_slice()),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK, "upload failed: {:?}", body);
    assert_eq!(body["message"], "cat uploaded");

    let filename = body["data"]["filename"].as_str().expect("filename");
    assert!(filename.ends_with("_thumb.jpg"), "got {filename}");
    assert_eq!(body["data"]["location"]["lat"], 0.0);
    assert_eq!(body["data"]["location"]["lng"], 0.0);

    let stored = tokio::fs::read(app.upload_dir.join(filename))
        .await
        .expect("stored thumbnail");
    assert_eq!(stored, b"jpeg bytes");

    tokio::fs::remove_dir_all(&app.upload_dir)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn form_without_a_file_part_is_rejected() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("paul").await;

    let (status, body) =
        post_upload(&app, Some(&token), &[("note", None, b"text".as_slice())]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400: {:?}", body);
    assert_eq!(body["error"], "file_required");
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("quinn").await;

    let (status, body) = post_upload(
        &app,
        Some(&token),
        &[("file", Some("empty.jpg"), b"".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400: {:?}", body);
    assert_eq!(body["error"], "file_required");
}

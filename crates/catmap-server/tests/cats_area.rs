use axum::http::StatusCode;
use serde_json::Value;

mod support;

use support::TestApp;

async fn seeded_app() -> TestApp {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("mapper").await;
    app.create_cat(&token, "Origin", 0.0, 0.0).await;
    app.create_cat(&token, "Middle", 5.0, 5.0).await;
    app.create_cat(&token, "Corner", 10.0, 10.0).await;
    app.create_cat(&token, "JustOutside", 10.1, 5.0).await;
    app.create_cat(&token, "West", -1.0, 5.0).await;
    app
}

fn names(body: &Value) -> Vec<String> {
    let mut names: Vec<String> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|cat| cat["name"].as_str().expect("name").to_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn area_search_includes_the_edges() {
    let app = seeded_app().await;

    let (status, body) = app
        .get_json(
            "/v1/cats/area?min_lat=0&max_lat=10&min_lng=0&max_lng=10",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "area search failed: {:?}", body);
    assert_eq!(names(&body), vec!["Corner", "Middle", "Origin"]);
}

#[tokio::test]
async fn degenerate_box_matches_a_single_point() {
    let app = seeded_app().await;

    let (status, body) = app
        .get_json(
            "/v1/cats/area?min_lat=5&max_lat=5&min_lng=5&max_lng=5",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Middle"]);
}

#[tokio::test]
async fn inverted_box_matches_nothing() {
    let app = seeded_app().await;

    let (status, body) = app
        .get_json(
            "/v1/cats/area?min_lat=10&max_lat=0&min_lng=0&max_lng=10",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 0);
}

#[tokio::test]
async fn malformed_queries_are_rejected() {
    let app = TestApp::new().await;

    // Missing edge.
    let (status, _body) = app
        .get_json("/v1/cats/area?min_lat=0&max_lat=10&min_lng=0", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Non-numeric edge.
    let (status, _body) = app
        .get_json(
            "/v1/cats/area?min_lat=0&max_lat=ten&min_lng=0&max_lng=10",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

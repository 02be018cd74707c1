use serde_json::json;
use uuid::Uuid;

mod support;

use support::TestApp;

fn error_code(body: &serde_json::Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .expect("error code")
}

#[tokio::test]
async fn cats_query_is_public() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("query").await;
    app.create_cat(&token, "Alpha", 0.0, 0.0).await;
    app.create_cat(&token, "Beta", 1.0, 1.0).await;

    let body = app
        .graphql(None, "{ cats { name ownerId } }", json!({}))
        .await;
    assert!(body.get("errors").is_none(), "unexpected errors: {:?}", body);
    assert_eq!(body["data"]["cats"].as_array().expect("cats").len(), 2);
}

#[tokio::test]
async fn cat_by_id_reports_missing_records() {
    let app = TestApp::new().await;

    let body = app
        .graphql(
            None,
            "query($id: UUID!) { catById(id: $id) { name } }",
            json!({ "id": Uuid::now_v7() }),
        )
        .await;
    assert_eq!(error_code(&body), "not_found");
}

#[tokio::test]
async fn cat_by_id_resolves_the_owner_field() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("greta").await;
    let cat_id = app.create_cat(&token, "Mingo", 0.0, 0.0).await;

    let body = app
        .graphql(
            None,
            "query($id: UUID!) { catById(id: $id) { name owner { userName email } } }",
            json!({ "id": cat_id }),
        )
        .await;
    assert!(body.get("errors").is_none(), "unexpected errors: {:?}", body);
    assert_eq!(body["data"]["catById"]["owner"]["userName"], "greta");
}

#[tokio::test]
async fn create_cat_requires_a_caller() {
    let app = TestApp::new().await;

    let body = app
        .graphql(
            None,
            r#"mutation {
                createCat(input: { name: "Nope", weight: 1.0, birthdate: "2020-01-01" }) { id }
            }"#,
            json!({}),
        )
        .await;
    assert_eq!(error_code(&body), "unauthorized");
}

#[tokio::test]
async fn create_cat_matches_the_rest_defaults() {
    let app = TestApp::new().await;
    let (id, token) = app.register_and_login("heike").await;

    let body = app
        .graphql(
            Some(&token),
            r#"mutation {
                createCat(input: { name: "Gql", weight: 2.5, birthdate: "2019-09-09" }) {
                    ownerId
                    location { lat lng }
                    birthdate
                }
            }"#,
            json!({}),
        )
        .await;
    assert!(body.get("errors").is_none(), "create failed: {:?}", body);
    let cat = &body["data"]["createCat"];
    assert_eq!(cat["ownerId"], id.to_string());
    assert_eq!(cat["location"]["lat"], 0.0);
    assert_eq!(cat["location"]["lng"], 0.0);
    assert_eq!(cat["birthdate"], "2019-09-09");
}

#[tokio::test]
async fn cats_by_area_takes_two_corners() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("ines").await;
    app.create_cat(&token, "In", 5.0, 5.0).await;
    app.create_cat(&token, "Edge", 10.0, 10.0).await;
    app.create_cat(&token, "Out", 11.0, 5.0).await;

    let body = app
        .graphql(
            None,
            r#"{
                catsByArea(
                    topRight: { lat: 10.0, lng: 10.0 },
                    bottomLeft: { lat: 0.0, lng: 0.0 },
                ) { name }
            }"#,
            json!({}),
        )
        .await;
    assert!(body.get("errors").is_none(), "area failed: {:?}", body);
    let mut names: Vec<&str> = body["data"]["catsByArea"]
        .as_array()
        .expect("cats")
        .iter()
        .map(|cat| cat["name"].as_str().expect("name"))
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Edge", "In"]);
}

#[tokio::test]
async fn update_cat_enforces_ownership() {
    let app = TestApp::new().await;
    let (_a, token_a) = app.register_and_login("jana").await;
    let (_b, token_b) = app.register_and_login("kurt").await;
    let cat_id = app.create_cat(&token_a, "Guarded", 0.0, 0.0).await;

    let body = app
        .graphql(
            Some(&token_b),
            r#"mutation($id: UUID!) {
                updateCat(id: $id, input: { name: "Taken" }) { name }
            }"#,
            json!({ "id": cat_id }),
        )
        .await;
    assert_eq!(error_code(&body), "not_owner");
}

#[tokio::test]
async fn delete_cat_returns_the_final_state_once() {
    let app = TestApp::new().await;
    let (_id, token) = app.register_and_login("lena").await;
    let cat_id = app.create_cat(&token, "Last", 0.0, 0.0).await;

    let document = "mutation($id: UUID!) { deleteCat(id: $id) { name } }";
    let body = app
        .graphql(Some(&token), document, json!({ "id": cat_id }))
        .await;
    assert!(body.get("errors").is_none(), "delete failed: {:?}", body);
    assert_eq!(body["data"]["deleteCat"]["name"], "Last");

    let body = app
        .graphql(Some(&token), document, json!({ "id": cat_id }))
        .await;
    assert_eq!(error_code(&body), "not_found");
}

#[tokio::test]
async fn login_mutation_issues_a_working_token() {
    let app = TestApp::new().await;
    app.register("mona", "mona@example.com", "password-1").await;

    let body = app
        .graphql(
            None,
            r#"mutation {
                login(userName: "mona", password: "password-1") {
                    token
                    user { userName }
                }
            }"#,
            json!({}),
        )
        .await;
    assert!(body.get("errors").is_none(), "login failed: {:?}", body);
    assert_eq!(body["data"]["login"]["user"]["userName"], "mona");

    // The GraphQL-issued token is good for the REST surface too.
    let token = body["data"]["login"]["token"].as_str().expect("token");
    let (status, body) = app.get_json("/v1/auth/token", Some(token)).await;
    assert_eq!(status, axum::http::StatusCode::OK, "token check: {:?}", body);
    assert_eq!(body["user_name"], "mona");
}

#[tokio::test]
async fn create_user_mutation_mirrors_registration() {
    let app = TestApp::new().await;

    let body = app
        .graphql(
            None,
            r#"mutation {
                createUser(input: {
                    userName: "nico",
                    email: "nico@example.com",
                    password: "password-1",
                }) { userName email }
            }"#,
            json!({}),
        )
        .await;
    assert!(body.get("errors").is_none(), "create failed: {:?}", body);
    assert_eq!(body["data"]["createUser"]["userName"], "nico");

    // Duplicate registration surfaces the same stable code as REST.
    let body = app
        .graphql(
            None,
            r#"mutation {
                createUser(input: {
                    userName: "nico",
                    email: "other@example.com",
                    password: "password-1",
                }) { userName }
            }"#,
            json!({}),
        )
        .await;
    assert_eq!(error_code(&body), "user_name_taken");
}

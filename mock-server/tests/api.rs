use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_users_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_user_returns_201_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"Alice","email":"alice@email.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@email.com");
}

#[tokio::test]
async fn create_user_missing_email_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/users", r#"{"name":"Alice"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_user_not_found() {
    let app = app();
    let resp = app.oneshot(get_request("/users/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_user_non_numeric_id_returns_400() {
    let app = app();
    let resp = app.oneshot(get_request("/users/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/users/999",
            r#"{"name":"Nope","email":"nope@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_user_missing_field_returns_422() {
    use tower::Service;

    // PUT takes the full {name, email} body, not a patch.
    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/users",
            r#"{"name":"Alice","email":"alice@email.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", "/users/1", r#"{"name":"OnlyName"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/999")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- ordering ---

#[tokio::test]
async fn list_preserves_creation_order_and_ids_increment() {
    use tower::Service;

    let mut app = app().into_service();

    for (name, email) in [("First", "first@x"), ("Second", "second@x"), ("Third", "third@x")] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/users",
                &format!(r#"{{"name":"{name}","email":"{email}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/users"))
        .await
        .unwrap();
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 3);
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(users[0].name, "First");
    assert_eq!(users[2].name, "Third");
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/users",
            r#"{"name":"Khaled","email":"khaled@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: User = body_json(resp).await;
    assert_eq!(created.name, "Khaled");
    let id = created.id;

    // list contains the one user
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/users"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: User = body_json(resp).await;
    assert_eq!(fetched, created);

    // update replaces both fields, id stays
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/users/{id}"),
            r#"{"name":"Shihab","email":"shihab@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: User = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Shihab");
    assert_eq!(updated.email, "shihab@example.com");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/users/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/users"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

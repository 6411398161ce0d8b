//! Signup and login against a live database

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;
use uuid::Uuid;

use movie_catalog::backend::auth::users::get_user_by_email;
use movie_catalog::backend::auth::users::insert_user;
use movie_catalog::backend::error::DbError;

use crate::common::{create_test_server, test_issuer, TestDatabase};

fn unique_email() -> String {
    format!("user_{}@example.com", Uuid::new_v4().simple())
}

#[tokio::test]
#[serial]
async fn test_signup_then_login() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();
    let server = create_test_server(Some(db.clone()));
    let email = unique_email();

    let signup = server
        .post("/v1/user/signup/")
        .json(&serde_json::json!({
            "full_name": "Jane Doe",
            "email": email,
            "password": "password123"
        }))
        .await;
    assert_eq!(signup.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = signup.json();
    assert_eq!(body["ok"], serde_json::json!(true));
    assert!(body.get("token").is_none());

    let stored = crate::assert_ok!(get_user_by_email(&db, &email).await);
    assert_ne!(stored.password, "password123");
    assert_eq!(stored.user_type, "user");

    let login = server
        .post("/v1/user/login/")
        .json(&serde_json::json!({ "email": email.to_uppercase(), "password": "password123" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let body: serde_json::Value = login.json();
    let token = body["token"].as_str().unwrap();

    let claims = crate::assert_ok!(test_issuer().verify(token));
    assert_eq!(claims.sub, stored.id.to_string());
    assert_eq!(claims.name, "Jane Doe");
}

#[tokio::test]
#[serial]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let server = create_test_server(Some(fixture.database()));
    let email = unique_email();

    server
        .post("/v1/user/signup/")
        .json(&serde_json::json!({
            "full_name": "Jane Doe",
            "email": email,
            "password": "password123"
        }))
        .await;

    let wrong_password = server
        .post("/v1/user/login/")
        .json(&serde_json::json!({ "email": email, "password": "password124" }))
        .await;
    let unknown_email = server
        .post("/v1/user/login/")
        .json(&serde_json::json!({ "email": unique_email(), "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_email.text());
    crate::assert_error_message!(wrong_password, "invalid email or password");
}

#[tokio::test]
#[serial]
async fn test_signup_with_taken_email_is_a_field_error() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let server = create_test_server(Some(fixture.database()));
    let email = unique_email();
    let request = serde_json::json!({
        "full_name": "Jane Doe",
        "email": email,
        "password": "password123"
    });

    let first = server.post("/v1/user/signup/").json(&request).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/v1/user/signup/").json(&request).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert!(body.get("email").is_some());
}

#[tokio::test]
#[serial]
async fn test_duplicate_insert_is_a_generic_persistence_error() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();
    let email = unique_email();

    crate::assert_ok!(insert_user(&db, "Jane Doe", &email, "hash").await);
    let err = insert_user(&db, "Jane Doe", &email, "hash").await.unwrap_err();

    match err {
        DbError::Persistence(message) => assert_eq!(message, "failed to save the credentials"),
        other => panic!("Expected Persistence, got {:?}", other),
    }
}

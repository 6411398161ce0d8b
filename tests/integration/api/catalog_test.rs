//! Catalog request validation tests

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::{bearer_token, create_test_server};

fn auth(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap()
}

#[tokio::test]
async fn test_non_numeric_movie_id_is_rejected() {
    let server = create_test_server(None);

    let response = server.get("/v1/movie/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(response, "invalid id parameter");
}

#[tokio::test]
async fn test_non_numeric_genre_id_is_rejected() {
    let server = create_test_server(None);

    let response = server.get("/v1/movies/genre/drama").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(response, "invalid id parameter");
}

#[tokio::test]
async fn test_undecodable_id_segment_is_rejected() {
    let server = create_test_server(None);

    for path in ["/v1/movie/%FF", "/v1/movies/genre/%FF", "/v1/genres/%C3%28"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{}",
            path
        );
        crate::assert_error_message!(response, "invalid id parameter");
    }
}

#[tokio::test]
async fn test_out_of_range_page_size_is_rejected() {
    let server = create_test_server(None);

    let response = server.get("/v1/movies").add_query_param("limit", 0).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("limit").is_some());
}

#[tokio::test]
async fn test_malformed_query_string_is_rejected() {
    let server = create_test_server(None);

    let response = server.get("/v1/movies?limit=lots").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(response, "invalid query parameters");
}

#[tokio::test]
async fn test_rating_requires_a_token() {
    let server = create_test_server(None);

    let response = server
        .post("/v1/movie/1/rating")
        .json(&serde_json::json!({ "rating": 4 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rating_outside_range_is_rejected() {
    let server = create_test_server(None);

    let response = server
        .post("/v1/movie/1/rating")
        .add_header(header::AUTHORIZATION, auth(&bearer_token(1, "user")))
        .json(&serde_json::json!({ "rating": 7 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("rating").is_some());
}

#[tokio::test]
async fn test_genre_mutation_requires_admin() {
    let server = create_test_server(None);

    let response = server
        .post("/v1/genres")
        .add_header(header::AUTHORIZATION, auth(&bearer_token(1, "user")))
        .json(&serde_json::json!({ "genre_name": "Western" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_latest_rejects_a_bad_token() {
    let server = create_test_server(None);

    let response = server
        .get("/v1/movies/latest")
        .add_header(header::AUTHORIZATION, auth("Bearer not-a-token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

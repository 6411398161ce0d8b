//! Status, CORS and routing tests

use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::create_test_server;

#[tokio::test]
async fn test_status_is_available_without_database() {
    let server = create_test_server(None);

    let response = server.get("/v1/status").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({
            "app_status": {
                "status": "Available",
                "environment": "test",
                "version": "1.0.0"
            }
        })
    );
}

#[tokio::test]
async fn test_every_response_carries_cors_headers() {
    let server = create_test_server(None);

    for path in ["/v1/status", "/v1/movie/abc", "/no/such/route"] {
        let response = server.get(path).await;
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*", "{}", path);
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization",
            "{}",
            path
        );
    }
}

#[tokio::test]
async fn test_preflight_is_answered_directly() {
    let server = create_test_server(None);

    let response = server.method(Method::OPTIONS, "/v1/user/login/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_unknown_route_is_enveloped_404() {
    let server = create_test_server(None);

    let response = server.get("/v1/nothing-here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_error_message!(response, "the requested resource could not be found");
}

#[tokio::test]
async fn test_data_routes_need_a_database() {
    let server = create_test_server(None);

    for path in ["/v1/movies", "/v1/movies/all", "/v1/genres", "/v1/movies/latest", "/v1/movie/1"] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::SERVICE_UNAVAILABLE,
            "{}",
            path
        );
    }
}

#[tokio::test]
async fn test_wrong_method_is_enveloped_405() {
    let server = create_test_server(None);

    let response = server.delete("/v1/movies").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    crate::assert_error_message!(
        response,
        "the DELETE method is not supported for this resource"
    );
}

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN,
};
use axum::http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn header<'a>(headers: &'a HeaderMap, name: &axum::http::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn preflight(config: &ServerConfig, origin: &str) -> HeaderMap {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/healthz")
        .header(ORIGIN, origin)
        .header(ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = api_routes().layer(cors_layer(config)).oneshot(request).await.unwrap();
    response.headers().clone()
}

async fn get_with_origin(config: &ServerConfig, origin: &str) -> (StatusCode, HeaderMap) {
    let request = Request::builder()
        .uri("/healthz")
        .header(ORIGIN, origin)
        .body(Body::empty())
        .unwrap();
    let response = api_routes().layer(cors_layer(config)).oneshot(request).await.unwrap();
    (response.status(), response.headers().clone())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(health::healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn preflight_from_default_origin_is_allowed() {
    let config = ServerConfig::parse(None, None).unwrap();
    let headers = preflight(&config, "http://localhost:5173").await;

    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_ORIGIN), Some("http://localhost:5173"));
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_METHODS), Some("GET,POST,OPTIONS"));
    assert_eq!(
        header(&headers, &ACCESS_CONTROL_ALLOW_HEADERS),
        Some("content-type,authorization,accept")
    );
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_CREDENTIALS), Some("true"));
    assert_eq!(header(&headers, &ACCESS_CONTROL_MAX_AGE), Some("3600"));
}

#[tokio::test]
async fn preflight_echoes_second_default_origin() {
    let config = ServerConfig::parse(None, None).unwrap();
    let headers = preflight(&config, "http://127.0.0.1:5173").await;
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_ORIGIN), Some("http://127.0.0.1:5173"));
}

#[tokio::test]
async fn preflight_from_unlisted_origin_is_denied() {
    let config = ServerConfig::parse(None, None).unwrap();
    let headers = preflight(&config, "http://evil.example").await;
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_ORIGIN), None);
}

#[tokio::test]
async fn custom_origin_list_replaces_defaults() {
    let config = ServerConfig::parse(None, Some("https://stocks.example.com")).unwrap();

    let allowed = preflight(&config, "https://stocks.example.com").await;
    assert_eq!(header(&allowed, &ACCESS_CONTROL_ALLOW_ORIGIN), Some("https://stocks.example.com"));

    let dropped = preflight(&config, "http://localhost:5173").await;
    assert_eq!(header(&dropped, &ACCESS_CONTROL_ALLOW_ORIGIN), None);
}

#[tokio::test]
async fn simple_request_carries_cors_headers_for_allowed_origin_only() {
    let config = ServerConfig::parse(None, None).unwrap();

    let (status, headers) = get_with_origin(&config, "http://localhost:5173").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_ORIGIN), Some("http://localhost:5173"));
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_CREDENTIALS), Some("true"));

    let (status, headers) = get_with_origin(&config, "http://evil.example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(header(&headers, &ACCESS_CONTROL_ALLOW_ORIGIN), None);
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use vidscrub::config::AppConfig;
use vidscrub::services::cleaner::{CopyCleaner, MetadataCleaner};
use vidscrub::{AppState, create_app};

const BOUNDARY: &str = "---------------------------123456789012345678901234567";

fn app_with_config(cleaner: Arc<dyn MetadataCleaner>, config: AppConfig) -> axum::Router {
    create_app(AppState::new(cleaner, config))
}

fn app() -> axum::Router {
    app_with_config(Arc::new(CopyCleaner), AppConfig::development())
}

fn multipart_body(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn post_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_rejects_disallowed_extension() {
    let body = multipart_body(&[("malware.exe", b"MZ")]);
    let response = app().oneshot(post_request("/clean", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains(".exe"));
}

#[tokio::test]
async fn test_rejects_unsupported_video_container() {
    let body = multipart_body(&[("clip.webm", b"webm bytes")]);
    let response = app().oneshot(post_request("/clean", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_path_traversal_is_stripped() {
    let body = multipart_body(&[("../../etc/evil.mp4", b"payload")]);
    let response = app().oneshot(post_request("/clean", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["results"][0]["filename"], "evil.mp4");
    assert_eq!(json["results"][0]["cleaned_name"], "cleaned_evil.mp4");
}

#[tokio::test]
async fn test_rejects_hidden_files() {
    let body = multipart_body(&[(".hidden.mp4", b"payload")]);
    let response = app().oneshot(post_request("/clean", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_per_file_size_limit() {
    let config = AppConfig {
        max_file_size: 8,
        ..AppConfig::development()
    };
    let app = app_with_config(Arc::new(CopyCleaner), config);

    let body = multipart_body(&[("clip.mp4", b"way more than eight bytes")]);
    let response = app.oneshot(post_request("/clean", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

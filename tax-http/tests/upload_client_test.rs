//! Exercises `HttpUploader` against a mock backend.
//!
//! Each test starts its own wiremock server and writes a small image file
//! into the system temp directory so the multipart body carries real bytes.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;
use tax_core::{DocumentUploader, SelectedFile, UploadError, UploadResult, UploadWidget};
use tax_http::{HttpUploader, UploadEndpoint};
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Plain ASCII so the body matchers can read the request as text.
const SCAN_BYTES: &[u8] = b"fake-form16-scan";

/// Writes a throwaway image named `name` into its own scratch directory.
fn scratch_image(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tax-http-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, SCAN_BYTES).unwrap();
    path
}

fn discard(image: &Path) {
    if let Some(dir) = image.parent() {
        std::fs::remove_dir_all(dir).ok();
    }
}

fn uploader_for(server: &MockServer) -> HttpUploader {
    HttpUploader::new(UploadEndpoint::parse(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn upload_posts_single_multipart_file_part() {
    let server = MockServer::start().await;
    let reply = json!({
        "parsed_data": { "gross_salary": 900000, "tds": 45000 },
        "tax_summary": { "recommended_regime": "New Regime", "savings": 12000 },
        "suggestion": "Switch regimes",
    });

    Mock::given(method("POST"))
        .and(path("/upload/form16"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"payslip.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(&reply))
        .expect(1)
        .mount(&server)
        .await;

    let image = scratch_image("payslip.png");
    let file = SelectedFile::image(&image).unwrap();

    let body = uploader_for(&server).upload(&file).await;
    discard(&image);

    assert_eq!(body.unwrap(), reply);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/form16"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let image = scratch_image("status.png");
    let file = SelectedFile::image(&image).unwrap();
    let err = uploader_for(&server).upload(&file).await.unwrap_err();
    discard(&image);

    assert!(matches!(err, UploadError::Status(500)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let image = scratch_image("malformed.png");
    let file = SelectedFile::image(&image).unwrap();
    let err = uploader_for(&server).upload(&file).await.unwrap_err();
    discard(&image);

    assert!(matches!(err, UploadError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Port 1 is closed on any sane test host.
    let uploader = HttpUploader::new(UploadEndpoint::parse("http://127.0.0.1:1").unwrap()).unwrap();

    let image = scratch_image("offline.png");
    let file = SelectedFile::image(&image).unwrap();
    let err = uploader.upload(&file).await.unwrap_err();
    discard(&image);

    assert!(matches!(err, UploadError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_file_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let file = SelectedFile::image("/this/path/does/not/exist.png").unwrap();
    let err = uploader_for(&server).upload(&file).await.unwrap_err();

    assert!(matches!(err, UploadError::Io { .. }), "got {err:?}");
}

#[tokio::test]
async fn rejected_upload_leaves_widget_with_failure_marker() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/form16"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let image = scratch_image("widget.png");
    let mut widget = UploadWidget::new(uploader_for(&server));
    widget.select_file(SelectedFile::image(&image).unwrap());

    assert!(widget.upload().await);
    discard(&image);

    assert!(!widget.state().is_in_flight());
    assert_eq!(widget.state().result(), &UploadResult::Failure);
    assert_eq!(
        widget.state().result().payload(),
        Some(json!({ "error": "Upload failed" }))
    );
}

#[tokio::test]
async fn health_returns_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Tax Assistant Backend Ready" })),
        )
        .mount(&server)
        .await;

    let message = uploader_for(&server).health().await.unwrap();
    assert_eq!(message, "Tax Assistant Backend Ready");
}

#[tokio::test]
async fn health_reports_unreachable_backend() {
    let uploader = HttpUploader::new(UploadEndpoint::parse("http://127.0.0.1:1").unwrap()).unwrap();
    let err = uploader.health().await.unwrap_err();
    assert!(matches!(err, UploadError::Transport(_)), "got {err:?}");
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use cardinal_server_lib::api::routes::{card_order_routes, product_routes};
use cardinal_server_lib::data::models::user::User;
use cardinal_server_lib::security::jwt::JwtService;
use cardinal_server_lib::utils::uploads;
use std::path::Path;
use tower::ServiceExt;

const BOUNDARY: &str = "test-form-boundary";

/// Points the upload directory at a scratch location and fills in the
/// secrets the config requires. Must run before the config is first read.
fn configure_environment() -> String {
    let dir = std::env::temp_dir()
        .join("cardinal-upload-tests")
        .to_string_lossy()
        .to_string();

    std::env::set_var("UPLOAD_DIR", &dir);
    std::env::set_var("JWT_SECRET", "upload-test-secret");
    std::env::set_var("STRIPE_SECRET_KEY", "sk_test_unused");

    dir
}

fn file_count(dir: &str) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}

fn bearer_token() -> String {
    let user = User {
        user_id: 1,
        name: "Test Shopper".to_string(),
        email: "shopper@example.com".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role: "User".to_string(),
        created_at: None,
        updated_at: None,
    };

    JwtService::new()
        .generate_token(&user)
        .expect("Failed to generate a token")
}

fn text_part(name: &str, value: &str) -> String {
    format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
}

fn file_part(name: &str, filename: &str, data: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n{data}\r\n"
    )
}

fn multipart_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", bearer_token()),
        )
        .body(Body::from(body))
        .expect("Failed to build request")
}

#[tokio::test]
#[serial_test::serial]
async fn stored_uploads_can_be_removed() {
    let dir = configure_environment();

    let uri = uploads::save_upload("design.png", b"png-bytes")
        .await
        .expect("Failed to store upload");
    assert!(uri.starts_with("/uploads/"));

    let filename = uri.strip_prefix("/uploads/").expect("served prefix");
    let stored = Path::new(&dir).join(filename);
    assert!(stored.exists());

    uploads::remove_upload(&uri)
        .await
        .expect("Failed to remove upload");
    assert!(!stored.exists());
}

#[tokio::test]
#[serial_test::serial]
async fn incomplete_card_order_forms_leave_no_files_behind() {
    let dir = configure_environment();
    let app = card_order_routes::routes();

    // card_type_id is missing, so the create must fail before any file
    // lands on disk.
    let body = format!(
        "{}{}--{BOUNDARY}--\r\n",
        text_part("quantity", "2"),
        file_part("design", "design.png", "png-bytes"),
    );

    let before = file_count(&dir);

    let response = app
        .oneshot(multipart_request("/", body))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(file_count(&dir), before);
}

#[tokio::test]
#[serial_test::serial]
async fn incomplete_product_forms_leave_no_files_behind() {
    let dir = configure_environment();
    let app = product_routes::routes();

    // name and category_id are missing.
    let body = format!(
        "{}{}--{BOUNDARY}--\r\n",
        text_part("price", "4.50"),
        file_part("images", "front.png", "png-bytes"),
    );

    let before = file_count(&dir);

    let response = app
        .oneshot(multipart_request("/", body))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(file_count(&dir), before);
}

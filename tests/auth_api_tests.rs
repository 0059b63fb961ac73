use axum::body::Body;
use axum::http::{Request, StatusCode};
use cardinal_server_lib::api::routes::auth_routes;
use cardinal_server_lib::data::database::Database;
use diesel::result;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use cardinal_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database and JWT_SECRET/STRIPE_SECRET_KEY in the environment"]
async fn register_then_login_returns_a_token() {
    setup().await.expect("Failed to reset tables");

    let app = auth_routes::routes();

    let register = post_json(
        "/register",
        json!({
            "name": "Test Shopper",
            "email": "shopper@example.com",
            "password": "hunter2hunter2"
        }),
    );

    let response = app
        .clone()
        .oneshot(register)
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = post_json(
        "/login",
        json!({
            "email": "shopper@example.com",
            "password": "hunter2hunter2"
        }),
    );

    let response = app.oneshot(login).await.expect("Login request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let payload: serde_json::Value =
        serde_json::from_slice(&body).expect("Login response should be JSON");

    assert!(payload["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(payload["user"]["email"], "shopper@example.com");
    assert_eq!(payload["user"]["role"], "User");
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn login_with_a_wrong_password_is_unauthorized() {
    setup().await.expect("Failed to reset tables");

    let app = auth_routes::routes();

    let register = post_json(
        "/register",
        json!({
            "name": "Test Shopper",
            "email": "shopper@example.com",
            "password": "hunter2hunter2"
        }),
    );
    let response = app
        .clone()
        .oneshot(register)
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = post_json(
        "/login",
        json!({
            "email": "shopper@example.com",
            "password": "wrong-password"
        }),
    );
    let response = app.oneshot(login).await.expect("Login request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn registering_a_duplicate_email_conflicts() {
    setup().await.expect("Failed to reset tables");

    let app = auth_routes::routes();

    let payload = json!({
        "name": "Test Shopper",
        "email": "shopper@example.com",
        "password": "hunter2hunter2"
    });

    let response = app
        .clone()
        .oneshot(post_json("/register", payload.clone()))
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/register", payload))
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn registration_validates_its_input() {
    let app = auth_routes::routes();

    let short_password = post_json(
        "/register",
        json!({
            "name": "Test Shopper",
            "email": "shopper@example.com",
            "password": "short"
        }),
    );
    let response = app
        .clone()
        .oneshot(short_password)
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bad_email = post_json(
        "/register",
        json!({
            "name": "Test Shopper",
            "email": "not-an-email",
            "password": "hunter2hunter2"
        }),
    );
    let response = app
        .oneshot(bad_email)
        .await
        .expect("Register request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

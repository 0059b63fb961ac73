use cardinal_server_lib::data::database::Database;
use cardinal_server_lib::data::models::user::UserRole;
use cardinal_server_lib::services::errors::NewsletterServiceError;
use cardinal_server_lib::services::newsletter_service::NewsletterService;
use diesel::result;
use diesel_async::RunQueryDsl;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use cardinal_server_lib::data::models::schema::newsletter_subscribers::dsl::newsletter_subscribers;

    diesel::delete(newsletter_subscribers)
        .execute(&mut conn)
        .await?;

    Ok(())
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn subscribing_twice_keeps_a_single_row() {
    setup().await.expect("Failed to reset tables");

    let service = NewsletterService::new();

    service
        .subscribe("reader@example.com")
        .await
        .expect("First subscribe failed");
    service
        .subscribe("reader@example.com")
        .await
        .expect("Second subscribe failed");

    let subscribers = service
        .get_subscribers(UserRole::Admin)
        .await
        .expect("Failed to list subscribers");

    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0].email, "reader@example.com");
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn unsubscribe_removes_the_address_and_is_idempotent() {
    setup().await.expect("Failed to reset tables");

    let service = NewsletterService::new();

    service
        .subscribe("reader@example.com")
        .await
        .expect("Subscribe failed");
    service
        .unsubscribe("reader@example.com")
        .await
        .expect("Unsubscribe failed");
    service
        .unsubscribe("reader@example.com")
        .await
        .expect("Repeated unsubscribe failed");

    let subscribers = service
        .get_subscribers(UserRole::Admin)
        .await
        .expect("Failed to list subscribers");

    assert!(subscribers.is_empty());
}

#[tokio::test]
async fn malformed_addresses_are_rejected_before_touching_the_database() {
    let service = NewsletterService::new();

    let missing_at = service.subscribe("not-an-email").await;
    assert_eq!(missing_at.unwrap_err(), NewsletterServiceError::InvalidEmail);

    let too_short = service.subscribe("@").await;
    assert_eq!(too_short.unwrap_err(), NewsletterServiceError::InvalidEmail);
}

#[tokio::test]
async fn subscriber_list_is_admin_only() {
    let service = NewsletterService::new();

    let denied = service.get_subscribers(UserRole::User).await;
    assert_eq!(
        denied.unwrap_err(),
        NewsletterServiceError::PermissionDenied
    );
}

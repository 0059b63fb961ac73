use bigdecimal::BigDecimal;
use cardinal_server_lib::data::database::Database;
use cardinal_server_lib::data::models::card_type::NewCardType;
use cardinal_server_lib::data::models::user::{NewUser, UserRole};
use cardinal_server_lib::data::repos::implementors::card_type_repo::CardTypeRepo;
use cardinal_server_lib::data::repos::implementors::user_repo::UserRepo;
use cardinal_server_lib::data::repos::traits::repository::Repository;
use cardinal_server_lib::services::card_order_service::{CardOrderService, CardOrderStatus};
use cardinal_server_lib::services::errors::CardOrderServiceError;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use cardinal_server_lib::data::models::schema::card_orders::dsl::card_orders;
    use cardinal_server_lib::data::models::schema::card_types::dsl::card_types;
    use cardinal_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(card_orders).execute(&mut conn).await?;
    diesel::delete(card_types).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

async fn seed_user(email: &str) -> i32 {
    let repo = UserRepo::new();

    let new_user = NewUser {
        name: "Test Shopper",
        email,
        password_hash: "not-a-real-hash",
        role: UserRole::User.as_str(),
    };

    repo.add(new_user).await.expect("Failed to insert user");

    repo.get_by_email(email)
        .await
        .expect("Failed to fetch user")
        .expect("User should exist")
        .user_id
}

async fn seed_card_type(name: &str, price: &str, status: &str) -> i32 {
    let repo = CardTypeRepo::new();

    repo.add(NewCardType {
        name,
        description: Some("test card type"),
        price: BigDecimal::from_str(price).expect("valid price"),
        image_uri: None,
        status,
    })
    .await
    .expect("Failed to insert card type");

    repo.get_by_name(name)
        .await
        .expect("Failed to fetch card type")
        .expect("Card type should exist")
        .card_type_id
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn create_computes_the_total_from_the_card_type_price() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("cards@example.com").await;
    let card_type_id = seed_card_type("Holographic", "500.00", "Active").await;

    let service = CardOrderService::new();
    let (card_order_id, total) = service
        .create_card_order(user_id, card_type_id, 3, "/uploads/design.png", None)
        .await
        .expect("Create failed");

    assert_eq!(total, BigDecimal::from_str("1500.00").expect("valid total"));

    let orders = service
        .get_user_orders(user_id)
        .await
        .expect("Failed to fetch card orders")
        .expect("One card order should exist");

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].card_order_id, card_order_id);
    assert_eq!(orders[0].status, "Pending");
    assert_eq!(orders[0].total_price, total);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn owner_cancel_works_once_and_only_from_pending() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("cards@example.com").await;
    let card_type_id = seed_card_type("Holographic", "500.00", "Active").await;

    let service = CardOrderService::new();
    let (card_order_id, _) = service
        .create_card_order(user_id, card_type_id, 1, "/uploads/design.png", None)
        .await
        .expect("Create failed");

    service
        .cancel(card_order_id, user_id)
        .await
        .expect("First cancel failed");

    let orders = service
        .get_user_orders(user_id)
        .await
        .expect("Failed to fetch card orders")
        .expect("Card order should exist");
    assert_eq!(orders[0].status, "Cancelled");

    let second = service.cancel(card_order_id, user_id).await;
    assert_eq!(
        second.unwrap_err(),
        CardOrderServiceError::InvalidStatusTransition
    );
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn cancelling_another_users_card_order_is_denied() {
    setup().await.expect("Failed to reset tables");

    let owner_id = seed_user("owner@example.com").await;
    let other_id = seed_user("other@example.com").await;
    let card_type_id = seed_card_type("Holographic", "500.00", "Active").await;

    let service = CardOrderService::new();
    let (card_order_id, _) = service
        .create_card_order(owner_id, card_type_id, 1, "/uploads/design.png", None)
        .await
        .expect("Create failed");

    let denied = service.cancel(card_order_id, other_id).await;
    assert_eq!(denied.unwrap_err(), CardOrderServiceError::PermissionDenied);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn inactive_card_types_cannot_be_ordered() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("cards@example.com").await;
    let card_type_id = seed_card_type("Retired Foil", "250.00", "Inactive").await;

    let service = CardOrderService::new();
    let rejected = service
        .create_card_order(user_id, card_type_id, 1, "/uploads/design.png", None)
        .await;

    assert_eq!(
        rejected.unwrap_err(),
        CardOrderServiceError::CardTypeUnavailable
    );
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn admin_status_changes_respect_the_transition_table() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("cards@example.com").await;
    let card_type_id = seed_card_type("Holographic", "500.00", "Active").await;

    let service = CardOrderService::new();
    let (card_order_id, _) = service
        .create_card_order(user_id, card_type_id, 2, "/uploads/design.png", None)
        .await
        .expect("Create failed");

    // Pending -> Completed skips Processing and must be refused.
    let skipped = service
        .update_status(card_order_id, CardOrderStatus::Completed, UserRole::Admin)
        .await;
    assert_eq!(
        skipped.unwrap_err(),
        CardOrderServiceError::InvalidStatusTransition
    );

    service
        .update_status(card_order_id, CardOrderStatus::Processing, UserRole::Admin)
        .await
        .expect("Pending -> Processing failed");

    service
        .update_status(card_order_id, CardOrderStatus::Completed, UserRole::Admin)
        .await
        .expect("Processing -> Completed failed");
}

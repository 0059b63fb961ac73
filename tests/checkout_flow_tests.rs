use bigdecimal::BigDecimal;
use cardinal_server_lib::data::database::Database;
use cardinal_server_lib::data::models::category::NewCategory;
use cardinal_server_lib::data::models::product::NewProduct;
use cardinal_server_lib::data::models::user::{NewUser, UserRole};
use cardinal_server_lib::data::repos::implementors::cart_repo::CartRepo;
use cardinal_server_lib::data::repos::implementors::category_repo::CategoryRepo;
use cardinal_server_lib::data::repos::implementors::product_repo::ProductRepo;
use cardinal_server_lib::data::repos::implementors::user_repo::UserRepo;
use cardinal_server_lib::data::repos::traits::repository::Repository;
use cardinal_server_lib::services::errors::OrderServiceError;
use cardinal_server_lib::services::order_service::{CustomerInfo, OrderService, OrderStatus};
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use cardinal_server_lib::data::models::schema::cart_items::dsl::cart_items;
    use cardinal_server_lib::data::models::schema::categories::dsl::categories;
    use cardinal_server_lib::data::models::schema::order_products::dsl::order_products;
    use cardinal_server_lib::data::models::schema::orders::dsl::orders;
    use cardinal_server_lib::data::models::schema::product_images::dsl::product_images;
    use cardinal_server_lib::data::models::schema::products::dsl::products;
    use cardinal_server_lib::data::models::schema::sales::dsl::sales;
    use cardinal_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(sales).execute(&mut conn).await?;
    diesel::delete(order_products).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(cart_items).execute(&mut conn).await?;
    diesel::delete(product_images).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(categories).execute(&mut conn).await?;
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

async fn seed_product(name: &str, price: &str) -> i32 {
    let category_repo = CategoryRepo::new();

    let category_id = match category_repo
        .get_by_name("Greeting Cards")
        .await
        .expect("Failed to fetch category")
    {
        Some(category) => category.category_id,
        None => {
            category_repo
                .add(NewCategory {
                    name: "Greeting Cards",
                    status: "Active",
                })
                .await
                .expect("Failed to insert category");

            category_repo
                .get_by_name("Greeting Cards")
                .await
                .expect("Failed to fetch category")
                .expect("Category should exist")
                .category_id
        }
    };

    let product_repo = ProductRepo::new();

    let new_product = NewProduct {
        name,
        description: Some("test product"),
        price: BigDecimal::from_str(price).expect("valid price"),
        category_id,
        status: "Active",
        is_latest: false,
    };

    product_repo
        .add_with_images(new_product, Vec::new())
        .await
        .expect("Failed to insert product")
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Test Shopper".to_string(),
        email: "shopper@example.com".to_string(),
        phone: "555-0100".to_string(),
        shipping_address: "1 Test Lane".to_string(),
    }
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn adding_the_same_product_twice_increments_quantity() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("cart@example.com").await;
    let product_id = seed_product("Birthday Card", "4.50").await;

    let repo = CartRepo::new();
    repo.add_or_increment(user_id, product_id, 2)
        .await
        .expect("First add failed");
    repo.add_or_increment(user_id, product_id, 3)
        .await
        .expect("Second add failed");

    let lines = repo
        .get_by_user(user_id)
        .await
        .expect("Failed to fetch cart");

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.quantity, 5);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn checkout_snapshots_prices_and_clears_the_cart() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("shopper@example.com").await;
    let card_id = seed_product("Birthday Card", "4.50").await;
    let wrap_id = seed_product("Gift Wrap", "2.25").await;

    let cart_repo = CartRepo::new();
    cart_repo
        .add_or_increment(user_id, card_id, 2)
        .await
        .expect("Add failed");
    cart_repo
        .add_or_increment(user_id, wrap_id, 1)
        .await
        .expect("Add failed");

    let service = OrderService::new();
    let (order_id, total) = service
        .checkout(user_id, &customer())
        .await
        .expect("Checkout failed");

    assert_eq!(total, BigDecimal::from_str("11.25").expect("valid total"));

    let remaining = cart_repo
        .get_by_user(user_id)
        .await
        .expect("Failed to fetch cart");
    assert!(remaining.is_empty(), "Checkout should clear the cart");

    let detail = service
        .get_order_by_id(order_id, user_id, UserRole::User)
        .await
        .expect("Failed to fetch order")
        .expect("Order should exist");

    assert_eq!(detail.0.status, "Pending");
    assert_eq!(detail.1.len(), 2);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn checkout_with_an_empty_cart_is_rejected() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("empty@example.com").await;

    let service = OrderService::new();
    let result = service.checkout(user_id, &customer()).await;

    assert_eq!(result.unwrap_err(), OrderServiceError::EmptyCart);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn status_updates_respect_the_transition_table() {
    setup().await.expect("Failed to reset tables");

    let user_id = seed_user("status@example.com").await;
    let product_id = seed_product("Birthday Card", "4.50").await;

    let cart_repo = CartRepo::new();
    cart_repo
        .add_or_increment(user_id, product_id, 1)
        .await
        .expect("Add failed");

    let service = OrderService::new();
    let (order_id, _) = service
        .checkout(user_id, &customer())
        .await
        .expect("Checkout failed");

    // Pending -> Shipped skips Processing and must be refused.
    let skipped = service
        .update_status(order_id, OrderStatus::Shipped, UserRole::Admin)
        .await;
    assert_eq!(
        skipped.unwrap_err(),
        OrderServiceError::InvalidStatusTransition
    );

    service
        .mark_paid(order_id)
        .await
        .expect("Pending -> Processing failed");

    service
        .update_status(order_id, OrderStatus::Shipped, UserRole::Admin)
        .await
        .expect("Processing -> Shipped failed");

    // Non-admins may not drive the status machine.
    let denied = service
        .update_status(order_id, OrderStatus::Delivered, UserRole::User)
        .await;
    assert_eq!(denied.unwrap_err(), OrderServiceError::PermissionDenied);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn cancelling_another_users_order_is_denied() {
    setup().await.expect("Failed to reset tables");

    let owner_id = seed_user("owner@example.com").await;
    let other_id = seed_user("other@example.com").await;
    let product_id = seed_product("Birthday Card", "4.50").await;

    let cart_repo = CartRepo::new();
    cart_repo
        .add_or_increment(owner_id, product_id, 1)
        .await
        .expect("Add failed");

    let service = OrderService::new();
    let (order_id, _) = service
        .checkout(owner_id, &customer())
        .await
        .expect("Checkout failed");

    let denied = service
        .cancel_order(order_id, other_id, UserRole::User)
        .await;
    assert_eq!(denied.unwrap_err(), OrderServiceError::PermissionDenied);

    service
        .cancel_order(order_id, owner_id, UserRole::User)
        .await
        .expect("Owner cancel failed");
}

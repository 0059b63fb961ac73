use async_trait::async_trait;
use bigdecimal::BigDecimal;
use cardinal_server_lib::data::database::Database;
use cardinal_server_lib::data::models::category::NewCategory;
use cardinal_server_lib::data::models::product::NewProduct;
use cardinal_server_lib::data::models::user::{NewUser, UserRole};
use cardinal_server_lib::data::repos::implementors::category_repo::CategoryRepo;
use cardinal_server_lib::data::repos::implementors::product_repo::ProductRepo;
use cardinal_server_lib::data::repos::implementors::sale_repo::SaleRepo;
use cardinal_server_lib::data::repos::implementors::user_repo::UserRepo;
use cardinal_server_lib::data::repos::traits::repository::Repository;
use cardinal_server_lib::services::errors::PaymentServiceError;
use cardinal_server_lib::services::order_service::{CustomerInfo, OrderService};
use cardinal_server_lib::services::payment_gateway::{
    GatewayError, IntentStatus, PaymentGateway, PaymentIntent,
};
use cardinal_server_lib::services::payment_service::PaymentService;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;

/// Gateway stub that reports every intent with a fixed status.
struct FixedStatusGateway {
    status: IntentStatus,
}

#[async_trait]
impl PaymentGateway for FixedStatusGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        _currency: &str,
        _order_ref: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        Ok(PaymentIntent {
            intent_id: "pi_test".to_string(),
            client_secret: "pi_test_secret".to_string(),
            amount_minor,
            status: IntentStatus::RequiresAction,
        })
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, GatewayError> {
        Ok(PaymentIntent {
            intent_id: intent_id.to_string(),
            client_secret: String::new(),
            amount_minor: 0,
            status: self.status,
        })
    }
}

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use cardinal_server_lib::data::models::schema::categories::dsl::categories;
    use cardinal_server_lib::data::models::schema::order_products::dsl::order_products;
    use cardinal_server_lib::data::models::schema::orders::dsl::orders;
    use cardinal_server_lib::data::models::schema::products::dsl::products;
    use cardinal_server_lib::data::models::schema::sales::dsl::sales;
    use cardinal_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(sales).execute(&mut conn).await?;
    diesel::delete(order_products).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(categories).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

async fn seed_order() -> (i32, i32) {
    let user_repo = UserRepo::new();
    user_repo
        .add(NewUser {
            name: "Test Shopper",
            email: "payer@example.com",
            password_hash: "not-a-real-hash",
            role: UserRole::User.as_str(),
        })
        .await
        .expect("Failed to insert user");

    let user_id = user_repo
        .get_by_email("payer@example.com")
        .await
        .expect("Failed to fetch user")
        .expect("User should exist")
        .user_id;

    let category_repo = CategoryRepo::new();
    category_repo
        .add(NewCategory {
            name: "Greeting Cards",
            status: "Active",
        })
        .await
        .expect("Failed to insert category");

    let category_id = category_repo
        .get_by_name("Greeting Cards")
        .await
        .expect("Failed to fetch category")
        .expect("Category should exist")
        .category_id;

    let product_id = ProductRepo::new()
        .add_with_images(
            NewProduct {
                name: "Birthday Card",
                description: None,
                price: BigDecimal::from_str("4.50").expect("valid price"),
                category_id,
                status: "Active",
                is_latest: false,
            },
            Vec::new(),
        )
        .await
        .expect("Failed to insert product");

    let customer = CustomerInfo {
        name: "Test Shopper".to_string(),
        email: "payer@example.com".to_string(),
        phone: "555-0100".to_string(),
        shipping_address: "1 Test Lane".to_string(),
    };

    let (order_id, _) = OrderService::new()
        .create_order(Some(user_id), &customer, vec![(product_id, 2)])
        .await
        .expect("Failed to create order");

    (order_id, user_id)
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn confirmed_payment_advances_the_order_and_records_one_sale() {
    setup().await.expect("Failed to reset tables");

    let (order_id, user_id) = seed_order().await;

    let service = PaymentService::new(FixedStatusGateway {
        status: IntentStatus::Succeeded,
    });

    service
        .confirm_payment(order_id, "pi_test")
        .await
        .expect("Confirmation failed");

    let order = OrderService::new()
        .get_order_by_id(order_id, user_id, UserRole::User)
        .await
        .expect("Failed to fetch order")
        .expect("Order should exist");
    assert_eq!(order.0.status, "Processing");

    let sales = SaleRepo::new()
        .get_all()
        .await
        .expect("Failed to fetch sales")
        .expect("One sale should exist");
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].order_id, Some(order_id));
    assert_eq!(sales[0].source, "online");

    // A repeated confirmation finds the order past Pending and must not
    // write a second sale.
    let retried = service.confirm_payment(order_id, "pi_test").await;
    assert_eq!(retried.unwrap_err(), PaymentServiceError::OrderNotPending);

    let sales = SaleRepo::new()
        .get_all()
        .await
        .expect("Failed to fetch sales")
        .expect("The sale should still exist");
    assert_eq!(sales.len(), 1);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
async fn failed_payment_leaves_the_order_pending_with_no_sale() {
    setup().await.expect("Failed to reset tables");

    let (order_id, user_id) = seed_order().await;

    let service = PaymentService::new(FixedStatusGateway {
        status: IntentStatus::Failed,
    });

    let outcome = service.confirm_payment(order_id, "pi_test").await;
    assert_eq!(outcome.unwrap_err(), PaymentServiceError::PaymentFailed);

    let order = OrderService::new()
        .get_order_by_id(order_id, user_id, UserRole::User)
        .await
        .expect("Failed to fetch order")
        .expect("Order should exist");
    assert_eq!(order.0.status, "Pending");

    let sales = SaleRepo::new().get_all().await.expect("Failed to fetch sales");
    assert!(sales.is_none());
}

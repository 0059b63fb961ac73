use bigdecimal::BigDecimal;
use cardinal_server_lib::api::controllers::dto::order_dto::OrderResponse;
use cardinal_server_lib::api::controllers::dto::product_dto::ProductResponse;
use std::str::FromStr;

fn money(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal literal")
}

#[test]
fn absent_order_fields_are_omitted_from_json() {
    let response = OrderResponse {
        order_id: 1,
        user_id: None,
        customer_name: "Test Shopper".to_string(),
        customer_email: "shopper@example.com".to_string(),
        total_amount: money("11.25"),
        status: "Pending".to_string(),
        created_at: None,
    };

    let json = serde_json::to_value(&response).expect("serializable response");
    let object = json.as_object().expect("a JSON object");

    assert!(!object.contains_key("user_id"));
    assert!(!object.contains_key("created_at"));
    assert_eq!(object["status"], "Pending");
}

#[test]
fn present_order_fields_are_serialized_plainly() {
    let response = OrderResponse {
        order_id: 2,
        user_id: Some(7),
        customer_name: "Test Shopper".to_string(),
        customer_email: "shopper@example.com".to_string(),
        total_amount: money("4.50"),
        status: "Processing".to_string(),
        created_at: Some("2026-08-30 12:00:00".to_string()),
    };

    let json = serde_json::to_value(&response).expect("serializable response");

    assert_eq!(json["user_id"], 7);
    assert_eq!(json["created_at"], "2026-08-30 12:00:00");
}

#[test]
fn products_without_a_description_omit_the_field() {
    let response = ProductResponse {
        product_id: 3,
        name: "Birthday Card".to_string(),
        description: None,
        price: money("4.50"),
        category_id: 1,
        status: "Active".to_string(),
        is_latest: false,
        image_uris: Vec::new(),
    };

    let json = serde_json::to_value(&response).expect("serializable response");
    let object = json.as_object().expect("a JSON object");

    assert!(!object.contains_key("description"));
    assert_eq!(object["name"], "Birthday Card");
}

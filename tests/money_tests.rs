use bigdecimal::BigDecimal;
use cardinal_server_lib::data::models::cart_item::CartItem;
use cardinal_server_lib::data::models::order_product::OrderProduct;
use cardinal_server_lib::data::models::product::Product;
use cardinal_server_lib::services::card_order_service::card_order_total;
use cardinal_server_lib::services::cart_service::cart_total;
use cardinal_server_lib::services::order_service::{merge_requested_lines, order_total};
use cardinal_server_lib::services::payment_service::to_minor_units;
use std::str::FromStr;

fn money(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal literal")
}

fn product(id: i32, price: &str) -> Product {
    Product {
        product_id: id,
        name: format!("Product {id}"),
        description: None,
        price: money(price),
        category_id: 1,
        status: "Active".to_string(),
        is_latest: false,
        created_at: None,
        updated_at: None,
    }
}

fn cart_line(id: i32, product_id: i32, quantity: i32) -> CartItem {
    CartItem {
        cart_item_id: id,
        user_id: 1,
        product_id,
        quantity,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn order_total_sums_quantity_weighted_prices() {
    let lines = vec![
        (1, 2, money("9.99")),
        (2, 1, money("24.50")),
        (3, 3, money("0.75")),
    ];

    assert_eq!(order_total(&lines), money("46.73"));
}

#[test]
fn order_total_of_no_lines_is_zero() {
    assert_eq!(order_total(&[]), BigDecimal::from(0));
}

#[test]
fn cart_total_matches_manual_sum() {
    let lines = vec![
        (cart_line(1, 10, 2), product(10, "5.25")),
        (cart_line(2, 11, 1), product(11, "100.00")),
    ];

    assert_eq!(cart_total(&lines), money("110.50"));
}

#[test]
fn card_order_total_scales_unit_price() {
    assert_eq!(card_order_total(&money("2.50"), 40), money("100.00"));
    assert_eq!(card_order_total(&money("19.99"), 1), money("19.99"));
}

#[test]
fn line_total_uses_snapshotted_unit_price() {
    let line = OrderProduct {
        order_id: 1,
        product_id: 7,
        quantity: 4,
        unit_price: money("3.30"),
    };

    assert_eq!(line.line_total(), money("13.20"));
}

#[test]
fn repeated_product_lines_collapse_into_one() {
    let merged = merge_requested_lines(vec![(7, 2), (3, 1), (7, 5)]);

    assert_eq!(merged, vec![(7, 7), (3, 1)]);
}

#[test]
fn distinct_product_lines_keep_their_order() {
    let merged = merge_requested_lines(vec![(2, 1), (9, 4), (5, 2)]);

    assert_eq!(merged, vec![(2, 1), (9, 4), (5, 2)]);
}

#[test]
fn merged_lines_total_matches_the_unmerged_sum() {
    let merged = merge_requested_lines(vec![(1, 2), (1, 3)]);
    let lines: Vec<(i32, i32, BigDecimal)> = merged
        .into_iter()
        .map(|(id, qty)| (id, qty, money("4.50")))
        .collect();

    assert_eq!(lines.len(), 1);
    assert_eq!(order_total(&lines), money("22.50"));
}

#[test]
fn to_minor_units_converts_whole_cents() {
    assert_eq!(to_minor_units(&money("10.00")), Some(1000));
    assert_eq!(to_minor_units(&money("0.01")), Some(1));
    assert_eq!(to_minor_units(&money("19.99")), Some(1999));
    assert_eq!(to_minor_units(&money("0")), Some(0));
}

#[test]
fn to_minor_units_rejects_sub_cent_precision() {
    assert_eq!(to_minor_units(&money("10.005")), None);
    assert_eq!(to_minor_units(&money("0.001")), None);
}

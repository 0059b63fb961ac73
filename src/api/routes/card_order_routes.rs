use crate::api::controllers::card_order_controller;
use axum::routing::{get, post, put};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(card_order_controller::get_all_card_orders))
        .route("/", post(card_order_controller::create_card_order))
        .route("/mine", get(card_order_controller::get_my_card_orders))
        .route(
            "/{id}/status",
            put(card_order_controller::update_card_order_status),
        )
        .route("/{id}/cancel", post(card_order_controller::cancel_card_order))
}

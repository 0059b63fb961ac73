use crate::api::controllers::order_controller;
use axum::routing::{get, post, put};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(order_controller::get_all_orders))
        .route("/", post(order_controller::create_order))
        .route("/checkout", post(order_controller::checkout))
        .route("/mine", get(order_controller::get_my_orders))
        .route("/user/{id}", get(order_controller::get_user_orders))
        .route("/{id}", get(order_controller::get_order_by_id))
        .route("/{id}/status", put(order_controller::update_order_status))
        .route("/{id}/cancel", post(order_controller::cancel_order))
}

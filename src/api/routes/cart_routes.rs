use crate::api::controllers::cart_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(cart_controller::get_cart))
        .route("/", delete(cart_controller::clear_cart))
        .route("/items", post(cart_controller::add_cart_item))
        .route("/items/{id}", put(cart_controller::update_cart_item))
        .route("/items/{id}", delete(cart_controller::remove_cart_item))
}

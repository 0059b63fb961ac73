use crate::api::controllers::card_type_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(card_type_controller::get_card_types))
        .route("/", post(card_type_controller::create_card_type))
        .route("/all", get(card_type_controller::get_all_card_types))
        .route("/{id}", get(card_type_controller::get_card_type_by_id))
        .route("/{id}", put(card_type_controller::update_card_type))
        .route("/{id}", delete(card_type_controller::retire_card_type))
}

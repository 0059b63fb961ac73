use crate::api::controllers::category_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(category_controller::get_categories))
        .route("/", post(category_controller::create_category))
        .route("/all", get(category_controller::get_all_categories))
        .route("/{id}", put(category_controller::update_category))
        .route("/{id}", delete(category_controller::delete_category))
}

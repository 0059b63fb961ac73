use crate::api::controllers::sale_controller;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(sale_controller::get_sales))
        .route("/", post(sale_controller::record_sale))
}

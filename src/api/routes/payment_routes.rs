use crate::api::controllers::payment_controller;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/intent", post(payment_controller::create_intent))
        .route("/confirm", post(payment_controller::confirm_payment))
}

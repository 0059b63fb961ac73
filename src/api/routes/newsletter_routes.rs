use crate::api::controllers::newsletter_controller;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/subscribe", post(newsletter_controller::subscribe))
        .route("/unsubscribe", post(newsletter_controller::unsubscribe))
        .route("/subscribers", get(newsletter_controller::get_subscribers))
}

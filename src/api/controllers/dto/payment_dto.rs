use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateIntentRequest {
    pub order_id: i32,
}

#[derive(Serialize)]
pub struct CreateIntentResponse {
    pub intent_id: String,
    pub client_secret: String,
}

#[derive(Deserialize)]
pub struct ConfirmPaymentRequest {
    pub order_id: i32,
    pub intent_id: String,
}

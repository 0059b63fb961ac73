use crate::api::controllers::dto::order_dto::{
    CheckoutRequest, CreateOrderRequest, OrderItemRequest,
};
use crate::services::order_service::CustomerInfo;

impl From<&CheckoutRequest> for CustomerInfo {
    fn from(request: &CheckoutRequest) -> Self {
        CustomerInfo {
            name: request.customer_name.clone(),
            email: request.customer_email.clone(),
            phone: request.customer_phone.clone(),
            shipping_address: request.shipping_address.clone(),
        }
    }
}

impl From<&CreateOrderRequest> for CustomerInfo {
    fn from(request: &CreateOrderRequest) -> Self {
        CustomerInfo {
            name: request.customer_name.clone(),
            email: request.customer_email.clone(),
            phone: request.customer_phone.clone(),
            shipping_address: request.shipping_address.clone(),
        }
    }
}

impl From<&OrderItemRequest> for (i32, i32) {
    fn from(item: &OrderItemRequest) -> Self {
        (item.product_id, item.quantity)
    }
}

pub mod card_order_service;
pub mod card_type_service;
pub mod cart_service;
pub mod category_service;
pub mod errors;
pub mod newsletter_service;
pub mod order_service;
pub mod payment_gateway;
pub mod payment_service;
pub mod product_service;
pub mod sale_service;

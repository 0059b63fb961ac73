pub mod card_order_controller;
pub mod card_type_controller;
pub mod cart_controller;
pub mod category_controller;
pub mod dto;
pub mod newsletter_controller;
pub mod order_controller;
pub mod payment_controller;
pub mod product_controller;
pub mod sale_controller;
pub mod user_controller;

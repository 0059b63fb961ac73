pub mod card_order_dto;
pub mod card_type_dto;
pub mod cart_dto;
pub mod category_dto;
pub mod newsletter_dto;
pub mod order_dto;
pub mod payment_dto;
pub mod product_dto;
pub mod sale_dto;
pub mod user_dto;

pub mod card_order_repo;
pub mod card_type_repo;
pub mod cart_repo;
pub mod category_repo;
pub mod newsletter_repo;
pub mod order_repo;
pub mod product_repo;
pub mod sale_repo;
pub mod user_repo;

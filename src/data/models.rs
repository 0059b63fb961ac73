pub mod card_order;
pub mod card_type;
pub mod cart_item;
pub mod category;
pub mod newsletter_subscriber;
pub mod order;
pub mod order_product;
pub mod product;
pub mod product_image;
pub mod sale;
pub mod schema;
pub mod user;

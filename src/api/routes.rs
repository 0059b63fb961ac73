pub mod auth_routes;
pub mod card_order_routes;
pub mod card_type_routes;
pub mod cart_routes;
pub mod category_routes;
pub mod newsletter_routes;
pub mod order_routes;
pub mod payment_routes;
pub mod product_routes;
pub mod sale_routes;

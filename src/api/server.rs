use crate::api::config::Config;
use crate::api::routes;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub async fn start() {
    let config = Config::default();

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/auth", routes::auth_routes::routes())
        .nest("/products", routes::product_routes::routes())
        .nest("/categories", routes::category_routes::routes())
        .nest("/cart", routes::cart_routes::routes())
        .nest("/orders", routes::order_routes::routes())
        .nest("/card-types", routes::card_type_routes::routes())
        .nest("/card-orders", routes::card_order_routes::routes())
        .nest("/payments", routes::payment_routes::routes())
        .nest("/sales", routes::sale_routes::routes())
        .nest("/newsletter", routes::newsletter_routes::routes());

    let router = Router::new()
        .route("/api", get(|| async { "Cardinal Server API is running!" }))
        .nest("/api/v1", api)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(cors_layer)
        .with_state::<()>(());

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}

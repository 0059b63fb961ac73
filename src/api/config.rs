use dotenvy::dotenv;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub upload_dir: String,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_expiration_minutes = std::env::var("JWT_EXPIRATION_MINUTES")
        .unwrap_or_else(|_| "60".to_string())
        .parse()
        .expect("JWT_EXPIRATION_MINUTES must be a valid u64");
    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    let stripe_secret_key =
        std::env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY must be set");
    let stripe_base_url = std::env::var("STRIPE_BASE_URL")
        .unwrap_or_else(|_| "https://api.stripe.com".to_string());

    tracing::info!("Config loaded");

    Config {
        bind_addr,
        jwt_secret,
        jwt_expiration_minutes,
        upload_dir,
        stripe_secret_key,
        stripe_base_url,
    }
});

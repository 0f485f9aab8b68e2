use std::env;

use chrono::Duration;

/// Process-wide configuration, read once at startup.
///
/// The JWT signing secret lives here and is handed to `TokenService` at
/// construction. Rotating it requires a restart and invalidates every
/// outstanding token; no revocation list is maintained.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let ttl_hours: i64 = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .expect("TOKEN_TTL_HOURS must be a valid number");
        let bcrypt_cost: u32 = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
            .parse()
            .expect("BCRYPT_COST must be a valid number");

        Self {
            database_url,
            host,
            port,
            jwt_secret,
            token_ttl: Duration::hours(ttl_hours),
            bcrypt_cost,
        }
    }
}

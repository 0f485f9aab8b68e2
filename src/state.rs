use std::sync::Arc;

use crate::application::{AuthService, OrderService, ProfileService};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::infrastructure::{
    DieselOrderRepository, DieselProfileRepository, DieselUserRepository,
};
use crate::security::password::BcryptHasher;
use crate::security::token::TokenService;

/// Everything a request handler needs, wired once at startup and shared
/// via `web::Data`. The token service is the only piece two consumers
/// share (login issues, the identity extractor verifies), hence the `Arc`.
pub struct AppState {
    pub auth: AuthService<DieselUserRepository, BcryptHasher>,
    pub profiles: ProfileService<DieselProfileRepository>,
    pub orders: OrderService<DieselOrderRepository>,
    pub users: DieselUserRepository,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        ));
        Self {
            auth: AuthService::new(
                DieselUserRepository::new(pool.clone()),
                BcryptHasher::new(config.bcrypt_cost),
                Arc::clone(&tokens),
            ),
            profiles: ProfileService::new(DieselProfileRepository::new(pool.clone())),
            orders: OrderService::new(DieselOrderRepository::new(pool.clone())),
            users: DieselUserRepository::new(pool),
            tokens,
        }
    }
}

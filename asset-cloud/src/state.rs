//! Application state for asset-cloud

use sqlx::PgPool;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Stripe secret key
    pub stripe_secret_key: String,
    /// Frontend base URL for checkout redirects
    pub site_domain: String,
    /// JWT secret for bearer-token verification
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState: connect the pool and run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            stripe_secret_key: config.stripe_secret_key.clone(),
            site_domain: config.site_domain.clone(),
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}

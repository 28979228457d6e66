use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use log::info;

use crate::config::AppConfig;

pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!("Connected to the database (max {} connections)", config.max_connections);
    Ok(pool)
}

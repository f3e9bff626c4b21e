use crate::config::DatabaseSettings;
use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use std::time::Duration;

pub fn connect_options(settings: &DatabaseSettings) -> Result<MySqlConnectOptions, sqlx::Error> {
    match &settings.url {
        Some(url) => url.parse::<MySqlConnectOptions>(),
        None => Ok(MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.database)),
    }
}

/// Builds the pool without opening a connection, so the service starts (and
/// serves degraded responses) while MySQL is down. Requests queue on the pool
/// for at most `acquire_timeout`.
pub fn init_pool(
    settings: &DatabaseSettings,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(settings)?;
    Ok(MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options))
}

pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

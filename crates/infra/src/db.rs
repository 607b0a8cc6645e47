//! Connection pool and schema migrations.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Open a pool and check the database is reachable.
///
/// `connect` establishes (and thereby pings) one connection before returning,
/// so a bad DSN or unreachable server fails here rather than on the first
/// request.
pub async fn connect(dsn: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(dsn)
        .await
}

/// Apply the bundled migrations (`crates/infra/migrations`).
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

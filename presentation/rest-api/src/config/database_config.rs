use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::{parse_or, read_var, require_var};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize database connection pool and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = require_var("DATABASE_URL")?;
    let max_connections = parse_or(
        "DATABASE_MAX_CONNECTIONS",
        read_var("DATABASE_MAX_CONNECTIONS"),
        5u32,
    )?;
    let migrations_path =
        read_var("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url, max_connections)).await?;
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}

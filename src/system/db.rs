use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

pub async fn init_db(pool: &SqlitePool) -> Result<()> {
    // 1. Crear tablas si no existen
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role_id INTEGER
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            age INTEGER NOT NULL,
            salary INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // 2. Crear usuario administrador inicial si la tabla está vacía
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        if let (Ok(admin_email), Ok(admin_pass)) = (
            std::env::var("ADMIN_EMAIL"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            let hash = bcrypt::hash(admin_pass, bcrypt::DEFAULT_COST)?;

            sqlx::query("INSERT INTO users (email, password_hash, role_id) VALUES (?, ?, 1)")
                .bind(&admin_email)
                .bind(hash)
                .execute(pool)
                .await?;

            info!("👤 Usuario administrador inicial creado: {}", admin_email);
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl User {
    /// El rol viaja en el token como texto, igual que lo espera el frontend
    pub fn role(&self) -> Option<String> {
        self.role_id.map(|role_id| role_id.to_string())
    }

    pub async fn read_by_email(
        pool: &sqlx::SqlitePool,
        email: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists_by_email(pool: &sqlx::SqlitePool, email: &str) -> sqlx::Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(
        pool: &sqlx::SqlitePool,
        email: &str,
        password_hash: &str,
        role_id: Option<i64>,
    ) -> sqlx::Result<Self> {
        let sql = "INSERT INTO users (email, password_hash, role_id) VALUES (?, ?, ?) RETURNING *";
        sqlx::query_as::<_, Self>(sql)
            .bind(email)
            .bind(password_hash)
            .bind(role_id)
            .fetch_one(pool)
            .await
    }
}

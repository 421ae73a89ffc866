use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub salary: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub salary: i64,
}

impl Employee {
    pub async fn read_all(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM employees")
            .fetch_all(pool)
            .await
    }

    pub async fn read(pool: &sqlx::SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &sqlx::SqlitePool, new_employee: NewEmployee) -> sqlx::Result<Self> {
        let sql = "INSERT INTO employees (name, email, phone, age, salary) \
                   VALUES (?, ?, ?, ?, ?) RETURNING *";
        sqlx::query_as::<_, Self>(sql)
            .bind(&new_employee.name)
            .bind(&new_employee.email)
            .bind(&new_employee.phone)
            .bind(new_employee.age)
            .bind(new_employee.salary)
            .fetch_one(pool)
            .await
    }

    /// Devuelve el número de filas afectadas (0 si el id no existe)
    pub async fn update(
        pool: &sqlx::SqlitePool,
        id: i64,
        employee: NewEmployee,
    ) -> sqlx::Result<u64> {
        let sql = "UPDATE employees SET name = ?, email = ?, phone = ?, age = ?, salary = ? \
                   WHERE id = ?";
        let result = sqlx::query(sql)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(employee.age)
            .bind(employee.salary)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &sqlx::SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await
    }
}

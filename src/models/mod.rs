use sqlx::SqlitePool;
mod employee;
mod error;
mod token_claims;
mod user;

pub use employee::{Employee, NewEmployee};
pub use error::AppError;
pub use token_claims::TokenClaims;
pub use user::{Credentials, NewUser, User};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub secret: String,
    pub issuer: String,
}

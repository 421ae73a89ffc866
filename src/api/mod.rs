mod auth;
mod employee;
mod health;
mod user;

pub use employee::router as employee_router;
pub use health::router as health_router;
pub use user::router as user_router;

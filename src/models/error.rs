use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
}

#[derive(Debug)]
pub enum AppError {
    // Errores de API
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),

    // Errores de almacenamiento; el detalle se queda en el log
    StorageError(sqlx::Error),

    // Error genérico para compatibilidad con anyhow
    Generic(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "No encontrado: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Solicitud incorrecta: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "No autorizado: {}", msg),
            AppError::StorageError(err) => write!(f, "Error de almacenamiento: {}", err),
            AppError::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            AppError::StorageError(err) => {
                // El mensaje del driver no sale al cliente
                error!("Error de almacenamiento: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_server_error",
                    "Internal server error".to_string(),
                )
            }
            AppError::Generic(err) => {
                error!("Error interno: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_server_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
            status: status.as_u16(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Generic(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StorageError(err)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Generic(err.into())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Generic(err.into())
    }
}

// Métodos de conveniencia para crear errores específicos
impl AppError {
    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("Recurso '{}' no encontrado", resource))
    }

    pub fn bad_request(msg: &str) -> Self {
        AppError::BadRequest(msg.to_string())
    }

    pub fn unauthorized(msg: &str) -> Self {
        AppError::Unauthorized(msg.to_string())
    }
}

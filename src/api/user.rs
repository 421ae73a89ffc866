use std::sync::Arc;

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing, Json, Router,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{AppError, AppState, Credentials, NewUser, TokenClaims, User};

// Mismo cuerpo para "no existe" y "contraseña mal": nada de enumerar usuarios
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", routing::post(register))
        .route("/login", routing::post(login))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Option<String>,
}

pub async fn register(
    State(app_state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Registro solicitado para {}", new_user.email);

    if User::exists_by_email(&app_state.pool, &new_user.email).await? {
        return Err(AppError::bad_request("Email already exists."));
    }

    let password_hash = hash(&new_user.password, DEFAULT_COST)?;
    let user = User::create(
        &app_state.pool,
        &new_user.email,
        &password_hash,
        new_user.role_id,
    )
    .await?;
    info!("Usuario {} creado", user.email);

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({"message": "Registration successful."})),
    ))
}

pub async fn login(
    State(app_state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    debug!("Login solicitado para {}", credentials.email);

    let user = User::read_by_email(&app_state.pool, &credentials.email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    if !verify(&credentials.password, &user.password_hash)? {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let claims = TokenClaims::new(&user.email, user.role(), &app_state.issuer);
    let token = claims.sign(&app_state.secret)?;

    // El rol va también en la respuesta: el cliente no tiene que abrir el token
    Ok(Json(LoginResponse {
        token,
        role: user.role(),
    }))
}

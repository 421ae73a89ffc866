use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Una hora de vida para el token, igual en emisión y verificación
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iss: String,
    pub iat: usize,
    pub exp: usize,
}

impl TokenClaims {
    pub fn new(email: &str, role: Option<String>, issuer: &str) -> Self {
        let now = chrono::Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + chrono::Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp() as usize;
        Self {
            sub: email.to_string(),
            role,
            iss: issuer.to_string(),
            iat,
            exp,
        }
    }

    pub fn sign(&self, secret: &str) -> jsonwebtoken::errors::Result<String> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Valida firma, emisor y caducidad; un token expirado es rechazado aquí
    pub fn verify(token: &str, secret: &str, issuer: &str) -> jsonwebtoken::errors::Result<Self> {
        let mut validation = Validation::default();
        validation.set_issuer(&[issuer]);
        decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
    }
}

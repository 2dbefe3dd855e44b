use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use crate::shared::config::AuthConfig;
use crate::system::users::directory::UserRecord;

/// Signing keys and token lifetime, built once at startup
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: chrono::Duration,
}

impl JwtKeys {
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = match &config.jwt_secret {
            Some(secret) if !secret.trim().is_empty() => secret.clone(),
            _ => {
                tracing::warn!(
                    "auth.jwt_secret is not configured, generated a random one; issued tokens will not survive a restart"
                );
                generate_jwt_secret()
            }
        };
        Self::new(&secret, config.token_lifetime_hours)
    }

    pub fn new(secret: &str, lifetime_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: chrono::Duration::hours(lifetime_hours),
        }
    }

    /// Generate JWT access token for a directory user
    pub fn generate_access_token(&self, user: &UserRecord) -> Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
            exp: (now + self.lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding).context("Failed to encode JWT token")
    }

    /// Validate JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .context("Failed to decode JWT token")?;
        Ok(token_data.claims)
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::OnceCell;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

static DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Installs the HS256 secret used by [`JwtBearer`]. Later calls are ignored.
pub fn install_jwt_secret(secret: &str) {
    if DECODING_KEY
        .set(DecodingKey::from_secret(secret.as_bytes()))
        .is_err()
    {
        tracing::warn!("JWT secret already installed, keeping the first one");
    }
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    is_staff: bool,
    exp: u64,
}

/// Caller identity extracted from a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: Option<String>,
    pub is_staff: bool,
}

fn decode_user(token: &str, key: &DecodingKey) -> Result<AuthenticatedUser, String> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if data.claims.sub.trim().is_empty() {
        return Err("auth.missing_subject".to_string());
    }

    Ok(AuthenticatedUser {
        user_id: UserId::new(data.claims.sub),
        email: data.claims.email,
        is_staff: data.claims.is_staff,
    })
}

/// Bearer token issued by the identity provider
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub AuthenticatedUser);

async fn jwt_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(key) = DECODING_KEY.get() else {
        tracing::error!("JWT secret not installed, rejecting request");
        return None;
    };

    match decode_user(&bearer.token, key) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
